pub mod get_content_service;
pub mod save_content_service;

pub use get_content_service::GetContentService;
pub use save_content_service::SaveContentService;
