use crate::api::schemas::{ContentEnvelope, ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::login_admin::{
    AdminLoginRequestDto, AdminSessionResponse,
};
use crate::modules::content::domain::ContentDocument;
use crate::modules::experience::adapter::incoming::web::routes::{
    CreateExperienceRequest, UpdateExperienceRequest,
};
use crate::modules::experience::application::domain::entities::{Experience, ExperienceType};
use crate::modules::portfolio::application::ports::incoming::use_cases::ReadyPortfolio;
use crate::modules::project::adapter::incoming::web::routes::{
    CreateProjectRequest, UpdateProjectRequest,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::seed::adapter::incoming::web::routes::SeedRequest;
use crate::modules::seed::application::ports::incoming::use_cases::{SeedCounts, SeedReport};
use crate::modules::tech_stack::adapter::incoming::web::routes::{
    CreateTechStackRequest, UpdateTechStackRequest,
};
use crate::modules::tech_stack::application::domain::entities::{TechCategory, TechStack};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Content, catalog and admin endpoints for the portfolio site",
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,

        // Content
        crate::modules::content::adapter::incoming::web::routes::get_content_handler,
        crate::modules::content::adapter::incoming::web::routes::save_content_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::list_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Tech stacks
        crate::modules::tech_stack::adapter::incoming::web::routes::list_tech_stacks_handler,
        crate::modules::tech_stack::adapter::incoming::web::routes::create_tech_stack_handler,
        crate::modules::tech_stack::adapter::incoming::web::routes::update_tech_stack_handler,
        crate::modules::tech_stack::adapter::incoming::web::routes::delete_tech_stack_handler,

        // Experiences
        crate::modules::experience::adapter::incoming::web::routes::list_experiences_handler,
        crate::modules::experience::adapter::incoming::web::routes::create_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::update_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::delete_experience_handler,

        // Admin
        crate::modules::seed::adapter::incoming::web::routes::seed_portfolio_handler,

        // Portfolio
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            ContentEnvelope,
            ContentDocument,
            AdminLoginRequestDto,
            AdminSessionResponse,
            Project,
            CreateProjectRequest,
            UpdateProjectRequest,
            TechStack,
            TechCategory,
            CreateTechStackRequest,
            UpdateTechStackRequest,
            Experience,
            ExperienceType,
            CreateExperienceRequest,
            UpdateExperienceRequest,
            SeedRequest,
            SeedCounts,
            SeedReport,
            ReadyPortfolio,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "content", description = "Site content document"),
        (name = "projects", description = "Project catalog"),
        (name = "techstacks", description = "Tech stack catalog"),
        (name = "experiences", description = "Experience timeline"),
        (name = "admin", description = "Administrative operations"),
        (name = "portfolio", description = "Aggregated public view"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin session token"))
                        .build(),
                ),
            )
        }
    }
}
