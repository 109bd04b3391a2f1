pub mod content_repository;

pub use content_repository::{
    ContentRepository, ContentRepositoryError, ContentSaved, StoredContent,
};
