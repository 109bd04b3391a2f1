use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentUseCase, SaveContentUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub get: Arc<dyn GetContentUseCase + Send + Sync>,
    pub save: Arc<dyn SaveContentUseCase + Send + Sync>,
}
