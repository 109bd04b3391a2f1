mod project_catalog;

pub use project_catalog::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, ProjectError,
    UpdateProjectUseCase,
};
