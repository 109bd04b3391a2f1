use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::modules::content::domain::ContentDocument;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::tech_stack::application::domain::entities::TechCategory;

/// Everything the public page renders, in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadyPortfolio {
    pub content: ContentDocument,
    pub projects: Vec<Project>,
    /// Every category is present; names are sorted.
    #[schema(value_type = Object)]
    pub tech_by_category: BTreeMap<TechCategory, Vec<String>>,
    /// Experiences, newest first.
    pub timeline: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PortfolioView {
    NotSeeded,
    Ready(Box<ReadyPortfolio>),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Content unavailable: {0}")]
    ContentUnavailable(String),
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError>;
}
