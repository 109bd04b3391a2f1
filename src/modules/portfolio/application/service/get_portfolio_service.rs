use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

use crate::modules::content::application::ports::incoming::use_cases::GetContentUseCase;
use crate::modules::experience::application::ports::incoming::use_cases::ListExperiencesUseCase;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase, PortfolioView, ReadyPortfolio,
};
use crate::modules::project::application::ports::incoming::use_cases::ListProjectsUseCase;
use crate::modules::tech_stack::application::domain::entities::{TechCategory, TechStack};
use crate::modules::tech_stack::application::ports::incoming::use_cases::ListTechStacksUseCase;

pub struct GetPortfolioService {
    content: Arc<dyn GetContentUseCase + Send + Sync>,
    projects: Arc<dyn ListProjectsUseCase + Send + Sync>,
    tech_stacks: Arc<dyn ListTechStacksUseCase + Send + Sync>,
    experiences: Arc<dyn ListExperiencesUseCase + Send + Sync>,
}

impl GetPortfolioService {
    pub fn new(
        content: Arc<dyn GetContentUseCase + Send + Sync>,
        projects: Arc<dyn ListProjectsUseCase + Send + Sync>,
        tech_stacks: Arc<dyn ListTechStacksUseCase + Send + Sync>,
        experiences: Arc<dyn ListExperiencesUseCase + Send + Sync>,
    ) -> Self {
        Self {
            content,
            projects,
            tech_stacks,
            experiences,
        }
    }
}

/// Groups names under every category, sorted, empty categories included.
pub fn group_by_category(techs: Vec<TechStack>) -> BTreeMap<TechCategory, Vec<String>> {
    let mut grouped: BTreeMap<TechCategory, Vec<String>> =
        TechCategory::ALL.into_iter().map(|c| (c, Vec::new())).collect();

    for tech in techs {
        grouped.entry(tech.category).or_default().push(tech.name);
    }
    for names in grouped.values_mut() {
        names.sort();
    }
    grouped
}

#[async_trait]
impl GetPortfolioUseCase for GetPortfolioService {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError> {
        let content = match self.content.execute().await {
            Ok(Some(content)) => content,
            Ok(None) => return Ok(PortfolioView::NotSeeded),
            Err(e) => return Err(GetPortfolioError::ContentUnavailable(e.to_string())),
        };

        let (projects, techs, timeline) = tokio::join!(
            self.projects.execute(),
            self.tech_stacks.execute(),
            self.experiences.execute(),
        );

        let projects = projects.unwrap_or_else(|e| {
            warn!(error = %e, "Projects unavailable, rendering without them");
            Vec::new()
        });
        let techs = techs.unwrap_or_else(|e| {
            warn!(error = %e, "Tech stacks unavailable, rendering without them");
            Vec::new()
        });
        let timeline = timeline.unwrap_or_else(|e| {
            warn!(error = %e, "Experiences unavailable, rendering without them");
            Vec::new()
        });

        Ok(PortfolioView::Ready(Box::new(ReadyPortfolio {
            content,
            projects,
            tech_by_category: group_by_category(techs),
            timeline,
        })))
    }
}
