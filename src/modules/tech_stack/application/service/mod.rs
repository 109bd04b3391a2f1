mod tech_stack_catalog_service;

pub use tech_stack_catalog_service::TechStackCatalogService;
