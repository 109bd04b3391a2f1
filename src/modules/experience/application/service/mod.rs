mod experience_catalog_service;

pub use experience_catalog_service::ExperienceCatalogService;
