use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedCounts {
    pub content: u64,
    pub projects: u64,
    pub tech_stacks: u64,
    pub experiences: u64,
}

impl SeedCounts {
    pub fn is_empty(&self) -> bool {
        self.content == 0 && self.projects == 0 && self.tech_stacks == 0 && self.experiences == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub ok: bool,
    pub seeded_at: DateTime<Utc>,
    pub inserted: SeedCounts,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedError {
    /// Carries what already exists.
    #[error("Portfolio already seeded")]
    AlreadySeeded(SeedCounts),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SeedPortfolioUseCase: Send + Sync {
    async fn execute(&self, force: bool) -> Result<SeedReport, SeedError>;
}
