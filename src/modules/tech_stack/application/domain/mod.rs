pub mod entities;

pub use entities::{
    NewTechStack, TechCategory, TechStack, TechStackChanges, TechStackPatch,
    TechStackValidationError,
};
