//! Canned use-case implementations for handler tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::sync::Mutex;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::IssuedToken;
use crate::auth::application::use_cases::login_admin::{
    AdminLoginError, AdminLoginRequest, ILoginAdminUseCase,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentError, GetContentUseCase, SaveContentError, SaveContentUseCase,
};
use crate::modules::content::domain::ContentDocument;
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceChanges, ExperienceDraft, ExperienceType,
};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceError, ListExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase, PortfolioView,
};
use crate::modules::project::application::domain::entities::{
    Project, ProjectChanges, ProjectDraft,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, ProjectError,
    UpdateProjectUseCase,
};
use crate::modules::seed::application::ports::incoming::use_cases::{
    SeedCounts, SeedError, SeedPortfolioUseCase, SeedReport,
};
use crate::modules::tech_stack::application::domain::entities::{
    TechCategory, TechStack, TechStackChanges,
};
use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    CreateTechStackUseCase, DeleteTechStackUseCase, ListTechStacksUseCase, TechStackDraft,
    TechStackError, UpdateTechStackUseCase,
};

/* --------------------------------------------------
 * Fixtures
 * -------------------------------------------------- */

pub fn sample_project(title: &str) -> Project {
    let now = Utc::now();
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "A sample project".to_string(),
        long_description: None,
        role: None,
        technologies: vec!["Rust".to_string()],
        demo_url: None,
        github_url: None,
        image_url: None,
        highlights: vec![],
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_tech(name: &str, category: TechCategory) -> TechStack {
    let now = Utc::now();
    TechStack {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_experience(title: &str, kind: ExperienceType) -> Experience {
    let now = Utc::now();
    Experience {
        id: Uuid::new_v4(),
        kind,
        title: title.to_string(),
        org: "Acme".to_string(),
        period: "2024".to_string(),
        summary: "Did things".to_string(),
        highlights: vec![],
        tags: vec![],
        links: vec![],
        created_at: now,
        updated_at: now,
    }
}

/* --------------------------------------------------
 * Auth
 * -------------------------------------------------- */

pub struct StubLoginAdmin;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdmin {
    async fn execute(&self, _request: AdminLoginRequest) -> Result<IssuedToken, AdminLoginError> {
        Err(AdminLoginError::InvalidCredentials)
    }
}

/* --------------------------------------------------
 * Content
 * -------------------------------------------------- */

pub struct StubGetContent {
    result: Result<Option<ContentDocument>, GetContentError>,
}

impl StubGetContent {
    pub fn returning(result: Result<Option<ContentDocument>, GetContentError>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl GetContentUseCase for StubGetContent {
    async fn execute(&self) -> Result<Option<ContentDocument>, GetContentError> {
        self.result.clone()
    }
}

pub struct StubSaveContent {
    result: Result<ContentDocument, SaveContentError>,
    received: Mutex<Option<Value>>,
}

impl StubSaveContent {
    pub fn returning(result: Result<ContentDocument, SaveContentError>) -> Self {
        Self {
            result,
            received: Mutex::new(None),
        }
    }

    /// Last body handed to the use case.
    pub fn received(&self) -> Option<Value> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl SaveContentUseCase for StubSaveContent {
    async fn execute(&self, raw: Value) -> Result<ContentDocument, SaveContentError> {
        *self.received.lock().unwrap() = Some(raw);
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Catalogs
 *
 * `single` answers create and update; `deleted` answers delete.
 * -------------------------------------------------- */

pub struct StubProjectCatalog {
    list: Result<Vec<Project>, ProjectError>,
    single: Result<Project, ProjectError>,
    deleted: Result<(), ProjectError>,
    created: Mutex<Option<ProjectDraft>>,
    updated: Mutex<Option<(Uuid, ProjectChanges)>>,
}

impl Default for StubProjectCatalog {
    fn default() -> Self {
        Self {
            list: Ok(vec![]),
            single: Err(ProjectError::NotFound),
            deleted: Ok(()),
            created: Mutex::new(None),
            updated: Mutex::new(None),
        }
    }
}

impl StubProjectCatalog {
    pub fn with_list(mut self, list: Result<Vec<Project>, ProjectError>) -> Self {
        self.list = list;
        self
    }

    pub fn with_single(mut self, single: Result<Project, ProjectError>) -> Self {
        self.single = single;
        self
    }

    pub fn with_delete(mut self, deleted: Result<(), ProjectError>) -> Self {
        self.deleted = deleted;
        self
    }

    pub fn created(&self) -> Option<ProjectDraft> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Option<(Uuid, ProjectChanges)> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListProjectsUseCase for StubProjectCatalog {
    async fn execute(&self) -> Result<Vec<Project>, ProjectError> {
        self.list.clone()
    }
}

#[async_trait]
impl CreateProjectUseCase for StubProjectCatalog {
    async fn execute(&self, draft: ProjectDraft) -> Result<Project, ProjectError> {
        *self.created.lock().unwrap() = Some(draft);
        self.single.clone()
    }
}

#[async_trait]
impl UpdateProjectUseCase for StubProjectCatalog {
    async fn execute(&self, id: Uuid, changes: ProjectChanges) -> Result<Project, ProjectError> {
        *self.updated.lock().unwrap() = Some((id, changes));
        self.single.clone()
    }
}

#[async_trait]
impl DeleteProjectUseCase for StubProjectCatalog {
    async fn execute(&self, _id: Uuid) -> Result<(), ProjectError> {
        self.deleted.clone()
    }
}

pub struct StubTechStackCatalog {
    list: Result<Vec<TechStack>, TechStackError>,
    single: Result<TechStack, TechStackError>,
    deleted: Result<(), TechStackError>,
    created: Mutex<Option<TechStackDraft>>,
    updated: Mutex<Option<(Uuid, TechStackChanges)>>,
}

impl Default for StubTechStackCatalog {
    fn default() -> Self {
        Self {
            list: Ok(vec![]),
            single: Err(TechStackError::NotFound),
            deleted: Ok(()),
            created: Mutex::new(None),
            updated: Mutex::new(None),
        }
    }
}

impl StubTechStackCatalog {
    pub fn with_list(mut self, list: Result<Vec<TechStack>, TechStackError>) -> Self {
        self.list = list;
        self
    }

    pub fn with_single(mut self, single: Result<TechStack, TechStackError>) -> Self {
        self.single = single;
        self
    }

    pub fn with_delete(mut self, deleted: Result<(), TechStackError>) -> Self {
        self.deleted = deleted;
        self
    }

    pub fn created(&self) -> Option<TechStackDraft> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Option<(Uuid, TechStackChanges)> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListTechStacksUseCase for StubTechStackCatalog {
    async fn execute(&self) -> Result<Vec<TechStack>, TechStackError> {
        self.list.clone()
    }
}

#[async_trait]
impl CreateTechStackUseCase for StubTechStackCatalog {
    async fn execute(&self, draft: TechStackDraft) -> Result<TechStack, TechStackError> {
        *self.created.lock().unwrap() = Some(draft);
        self.single.clone()
    }
}

#[async_trait]
impl UpdateTechStackUseCase for StubTechStackCatalog {
    async fn execute(
        &self,
        id: Uuid,
        changes: TechStackChanges,
    ) -> Result<TechStack, TechStackError> {
        *self.updated.lock().unwrap() = Some((id, changes));
        self.single.clone()
    }
}

#[async_trait]
impl DeleteTechStackUseCase for StubTechStackCatalog {
    async fn execute(&self, _id: Uuid) -> Result<(), TechStackError> {
        self.deleted.clone()
    }
}

pub struct StubExperienceCatalog {
    list: Result<Vec<Experience>, ExperienceError>,
    single: Result<Experience, ExperienceError>,
    deleted: Result<(), ExperienceError>,
    created: Mutex<Option<ExperienceDraft>>,
    updated: Mutex<Option<(Uuid, ExperienceChanges)>>,
}

impl Default for StubExperienceCatalog {
    fn default() -> Self {
        Self {
            list: Ok(vec![]),
            single: Err(ExperienceError::NotFound),
            deleted: Ok(()),
            created: Mutex::new(None),
            updated: Mutex::new(None),
        }
    }
}

impl StubExperienceCatalog {
    pub fn with_list(mut self, list: Result<Vec<Experience>, ExperienceError>) -> Self {
        self.list = list;
        self
    }

    pub fn with_single(mut self, single: Result<Experience, ExperienceError>) -> Self {
        self.single = single;
        self
    }

    pub fn with_delete(mut self, deleted: Result<(), ExperienceError>) -> Self {
        self.deleted = deleted;
        self
    }

    pub fn created(&self) -> Option<ExperienceDraft> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Option<(Uuid, ExperienceChanges)> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListExperiencesUseCase for StubExperienceCatalog {
    async fn execute(&self) -> Result<Vec<Experience>, ExperienceError> {
        self.list.clone()
    }
}

#[async_trait]
impl CreateExperienceUseCase for StubExperienceCatalog {
    async fn execute(&self, draft: ExperienceDraft) -> Result<Experience, ExperienceError> {
        *self.created.lock().unwrap() = Some(draft);
        self.single.clone()
    }
}

#[async_trait]
impl UpdateExperienceUseCase for StubExperienceCatalog {
    async fn execute(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<Experience, ExperienceError> {
        *self.updated.lock().unwrap() = Some((id, changes));
        self.single.clone()
    }
}

#[async_trait]
impl DeleteExperienceUseCase for StubExperienceCatalog {
    async fn execute(&self, _id: Uuid) -> Result<(), ExperienceError> {
        self.deleted.clone()
    }
}

/* --------------------------------------------------
 * Seed / Portfolio
 * -------------------------------------------------- */

pub struct StubSeed {
    error: Option<SeedError>,
    forced: Mutex<Option<bool>>,
}

impl StubSeed {
    pub fn succeeding() -> Self {
        Self {
            error: None,
            forced: Mutex::new(None),
        }
    }

    pub fn failing(error: SeedError) -> Self {
        Self {
            error: Some(error),
            forced: Mutex::new(None),
        }
    }

    /// The `force` flag of the last call.
    pub fn forced(&self) -> Option<bool> {
        *self.forced.lock().unwrap()
    }
}

#[async_trait]
impl SeedPortfolioUseCase for StubSeed {
    async fn execute(&self, force: bool) -> Result<SeedReport, SeedError> {
        *self.forced.lock().unwrap() = Some(force);

        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(SeedReport {
                ok: true,
                seeded_at: Utc::now(),
                inserted: SeedCounts {
                    content: 1,
                    ..Default::default()
                },
            }),
        }
    }
}

pub struct StubPortfolio {
    result: Result<PortfolioView, GetPortfolioError>,
}

impl StubPortfolio {
    pub fn returning(result: Result<PortfolioView, GetPortfolioError>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl GetPortfolioUseCase for StubPortfolio {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError> {
        self.result.clone()
    }
}
