pub mod get_content;
pub mod save_content;

pub use get_content::{GetContentError, GetContentUseCase};
pub use save_content::{SaveContentError, SaveContentUseCase};
