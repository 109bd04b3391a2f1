use crate::auth::adapter::incoming::web::session_cookie::SessionCookiePolicy;
use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentUseCase, SaveContentError, SaveContentUseCase,
};
use crate::modules::content::application::ContentUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ListExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::modules::experience::application::ExperienceUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, PortfolioView,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, UpdateProjectUseCase,
};
use crate::modules::project::application::ProjectUseCases;
use crate::modules::seed::application::ports::incoming::use_cases::SeedPortfolioUseCase;
use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    CreateTechStackUseCase, DeleteTechStackUseCase, ListTechStacksUseCase, UpdateTechStackUseCase,
};
use crate::modules::tech_stack::application::TechStackUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    content: ContentUseCases,
    project: ProjectUseCases,
    tech_stack: TechStackUseCases,
    experience: ExperienceUseCases,
    seed: Arc<dyn SeedPortfolioUseCase + Send + Sync>,
    portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let projects = Arc::new(StubProjectCatalog::default());
        let tech_stacks = Arc::new(StubTechStackCatalog::default());
        let experiences = Arc::new(StubExperienceCatalog::default());

        Self {
            content: ContentUseCases {
                get: Arc::new(StubGetContent::returning(Ok(None))),
                save: Arc::new(StubSaveContent::returning(Err(SaveContentError::InvalidBody))),
            },
            project: ProjectUseCases {
                list: projects.clone(),
                create: projects.clone(),
                update: projects.clone(),
                delete: projects,
            },
            tech_stack: TechStackUseCases {
                list: tech_stacks.clone(),
                create: tech_stacks.clone(),
                update: tech_stacks.clone(),
                delete: tech_stacks,
            },
            experience: ExperienceUseCases {
                list: experiences.clone(),
                create: experiences.clone(),
                update: experiences.clone(),
                delete: experiences,
            },
            seed: Arc::new(StubSeed::succeeding()),
            portfolio: Arc::new(StubPortfolio::returning(Ok(PortfolioView::NotSeeded))),
            login_admin: Arc::new(StubLoginAdmin),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_content(mut self, uc: Arc<dyn GetContentUseCase + Send + Sync>) -> Self {
        self.content.get = uc;
        self
    }

    pub fn with_save_content(mut self, uc: Arc<dyn SaveContentUseCase + Send + Sync>) -> Self {
        self.content.save = uc;
        self
    }

    pub fn with_login_admin(mut self, uc: Arc<dyn ILoginAdminUseCase + Send + Sync>) -> Self {
        self.login_admin = uc;
        self
    }

    /// One stub answers every project route.
    pub fn with_projects<S>(mut self, stub: Arc<S>) -> Self
    where
        S: ListProjectsUseCase
            + CreateProjectUseCase
            + UpdateProjectUseCase
            + DeleteProjectUseCase
            + Send
            + Sync
            + 'static,
    {
        self.project = ProjectUseCases {
            list: stub.clone(),
            create: stub.clone(),
            update: stub.clone(),
            delete: stub,
        };
        self
    }

    pub fn with_tech_stacks<S>(mut self, stub: Arc<S>) -> Self
    where
        S: ListTechStacksUseCase
            + CreateTechStackUseCase
            + UpdateTechStackUseCase
            + DeleteTechStackUseCase
            + Send
            + Sync
            + 'static,
    {
        self.tech_stack = TechStackUseCases {
            list: stub.clone(),
            create: stub.clone(),
            update: stub.clone(),
            delete: stub,
        };
        self
    }

    pub fn with_experiences<S>(mut self, stub: Arc<S>) -> Self
    where
        S: ListExperiencesUseCase
            + CreateExperienceUseCase
            + UpdateExperienceUseCase
            + DeleteExperienceUseCase
            + Send
            + Sync
            + 'static,
    {
        self.experience = ExperienceUseCases {
            list: stub.clone(),
            create: stub.clone(),
            update: stub.clone(),
            delete: stub,
        };
        self
    }

    pub fn with_seed(mut self, uc: Arc<dyn SeedPortfolioUseCase + Send + Sync>) -> Self {
        self.seed = uc;
        self
    }

    pub fn with_portfolio(mut self, uc: Arc<dyn GetPortfolioUseCase + Send + Sync>) -> Self {
        self.portfolio = uc;
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            content: self.content,
            project: self.project,
            tech_stack: self.tech_stack,
            experience: self.experience,
            seed: self.seed,
            portfolio: self.portfolio,
            login_admin: self.login_admin,
            session_cookie: SessionCookiePolicy::new(false),
        }
    }
}
