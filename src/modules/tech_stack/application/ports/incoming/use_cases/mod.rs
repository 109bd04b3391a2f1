mod tech_stack_catalog;

pub use tech_stack_catalog::{
    CreateTechStackUseCase, DeleteTechStackUseCase, ListTechStacksUseCase, TechStackDraft,
    TechStackError, UpdateTechStackUseCase,
};
