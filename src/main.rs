pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::session_cookie::SessionCookiePolicy;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::application::domain::entities::AdminCredentials;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::login_admin::{ILoginAdminUseCase, LoginAdminUseCase};
use crate::config::ServerConfig;
use crate::modules::content::adapter::outgoing::ContentRepositoryPostgres;
use crate::modules::content::application::service::{GetContentService, SaveContentService};
use crate::modules::content::application::ContentUseCases;
use crate::modules::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::modules::experience::application::service::ExperienceCatalogService;
use crate::modules::experience::application::ExperienceUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::modules::portfolio::application::service::GetPortfolioService;
use crate::modules::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::modules::project::application::service::ProjectCatalogService;
use crate::modules::project::application::ProjectUseCases;
use crate::modules::seed::application::ports::incoming::use_cases::SeedPortfolioUseCase;
use crate::modules::seed::application::service::SeedService;
use crate::modules::tech_stack::adapter::outgoing::TechStackRepositoryPostgres;
use crate::modules::tech_stack::application::service::TechStackCatalogService;
use crate::modules::tech_stack::application::TechStackUseCases;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub project: ProjectUseCases,
    pub tech_stack: TechStackUseCases,
    pub experience: ExperienceUseCases,
    pub seed: Arc<dyn SeedPortfolioUseCase + Send + Sync>,
    pub portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub session_cookie: SessionCookiePolicy,
}

fn startup_error(e: impl std::fmt::Display) -> io::Error {
    error!(error = %e, "Startup failed");
    io::Error::other(e.to_string())
}

/// `portfolio_cms hash-password <password>` prints an Argon2 PHC string
/// suitable for `ADMIN_PASSWORD_HASH`.
#[cfg(not(tarpaulin_include))]
async fn hash_password(password: Option<String>) -> io::Result<()> {
    let password = password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "usage: hash-password <password>"))?;

    let hash = Argon2Hasher::from_env()
        .hash_password(&password)
        .await
        .map_err(startup_error)?;

    println!("{hash}");
    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config::load_env_files();

    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("hash-password") {
        return hash_password(args.next()).await;
    }

    info!("Starting application...");

    let server = ServerConfig::from_env().map_err(startup_error)?;
    let jwt_config = JwtConfig::from_env().map_err(startup_error)?;
    let credentials = AdminCredentials::from_env().map_err(startup_error)?;

    // Database connection
    let mut opt = ConnectOptions::new(server.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(startup_error)?;
    let db_arc = Arc::new(conn);

    // Repositories
    let content_repo = ContentRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let tech_stack_repo = TechStackRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));

    // Use cases
    let content = ContentUseCases {
        get: Arc::new(GetContentService::new(content_repo.clone())),
        save: Arc::new(SaveContentService::new(content_repo.clone())),
    };

    let projects = Arc::new(ProjectCatalogService::new(project_repo.clone()));
    let project = ProjectUseCases {
        list: projects.clone(),
        create: projects.clone(),
        update: projects.clone(),
        delete: projects,
    };

    let tech_stacks = Arc::new(TechStackCatalogService::new(tech_stack_repo.clone()));
    let tech_stack = TechStackUseCases {
        list: tech_stacks.clone(),
        create: tech_stacks.clone(),
        update: tech_stacks.clone(),
        delete: tech_stacks,
    };

    let experiences = Arc::new(ExperienceCatalogService::new(experience_repo.clone()));
    let experience = ExperienceUseCases {
        list: experiences.clone(),
        create: experiences.clone(),
        update: experiences.clone(),
        delete: experiences,
    };

    let seed = SeedService::new(content_repo, project_repo, tech_stack_repo, experience_repo);
    let portfolio = GetPortfolioService::new(
        content.get.clone(),
        project.list.clone(),
        tech_stack.list.clone(),
        experience.list.clone(),
    );

    // Auth
    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let login_admin = LoginAdminUseCase::new(
        credentials,
        Arc::new(Argon2Hasher::from_env()),
        Arc::clone(&token_provider_arc),
    );

    let state = AppState {
        content,
        project,
        tech_stack,
        experience,
        seed: Arc::new(seed),
        portfolio: Arc::new(portfolio),
        login_admin: Arc::new(login_admin),
        session_cookie: SessionCookiePolicy::new(server.is_production()),
    };

    let server_url = server.bind_address();
    info!(address = %server_url, environment = %server.environment, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    // Content
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::save_content_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::delete_project_handler);
    // Tech stacks
    cfg.service(crate::modules::tech_stack::adapter::incoming::web::routes::list_tech_stacks_handler);
    cfg.service(crate::modules::tech_stack::adapter::incoming::web::routes::create_tech_stack_handler);
    cfg.service(crate::modules::tech_stack::adapter::incoming::web::routes::update_tech_stack_handler);
    cfg.service(crate::modules::tech_stack::adapter::incoming::web::routes::delete_tech_stack_handler);
    // Experiences
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::list_experiences_handler);
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Admin
    cfg.service(crate::modules::seed::adapter::incoming::web::routes::seed_portfolio_handler);
    // Portfolio
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
