pub mod entities;

pub use entities::{
    NewProject, Project, ProjectChanges, ProjectDraft, ProjectPatch, ProjectValidationError,
};
