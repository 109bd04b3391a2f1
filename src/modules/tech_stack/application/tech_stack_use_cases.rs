use std::sync::Arc;

use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    CreateTechStackUseCase, DeleteTechStackUseCase, ListTechStacksUseCase, UpdateTechStackUseCase,
};

#[derive(Clone)]
pub struct TechStackUseCases {
    pub list: Arc<dyn ListTechStacksUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTechStackUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTechStackUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTechStackUseCase + Send + Sync>,
}
