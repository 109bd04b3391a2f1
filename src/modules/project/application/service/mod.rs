mod project_catalog_service;

pub use project_catalog_service::ProjectCatalogService;
