pub mod entities;

pub use entities::{
    Experience, ExperienceChanges, ExperienceDraft, ExperiencePatch, ExperienceType,
    ExperienceValidationError, NewExperience,
};
