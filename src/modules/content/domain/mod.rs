pub mod defaults;
pub mod document;
pub mod item_id;
pub mod normalizer;

pub use document::{ContentDocument, CONTENT_SLUG};
pub use item_id::{ItemIdGenerator, ItemKind, RandomItemIds};
pub use normalizer::{normalize_content, ContentNormalizer};
