pub mod get_content;
pub mod save_content;

pub use get_content::*;
pub use save_content::*;
