mod experience_catalog;

pub use experience_catalog::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceError, ListExperiencesUseCase,
    UpdateExperienceUseCase,
};
