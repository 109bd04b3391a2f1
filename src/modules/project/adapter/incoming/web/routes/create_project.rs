use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::adapter::incoming::web::routes::project_error_response;
use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub role: Option<String>,
    pub technologies: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub highlights: Vec<String>,
}

impl From<CreateProjectRequest> for ProjectDraft {
    fn from(req: CreateProjectRequest) -> Self {
        ProjectDraft {
            title: req.title,
            description: req.description,
            long_description: req.long_description,
            role: req.role,
            technologies: req.technologies,
            demo_url: req.demo_url,
            github_url: req.github_url,
            image_url: req.image_url,
            highlights: req.highlights,
        }
    }
}

/// Create a project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner().into()).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => project_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::project::application::domain::entities::ProjectValidationError;
    use crate::modules::project::application::ports::incoming::use_cases::ProjectError;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, token_provider_data};
    use crate::tests::support::stubs::{sample_project, StubProjectCatalog};

    async fn call(
        stub: Arc<StubProjectCatalog>,
        token: Option<String>,
        body: Value,
    ) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default().with_projects(stub).build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(create_project_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri("/api/projects").set_json(body);
        if let Some(token) = token {
            req = req.insert_header(("Authorization", format!("Bearer {token}")));
        }
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn creates_with_admin_session() {
        let stub = Arc::new(
            StubProjectCatalog::default().with_single(Ok(sample_project("Site"))),
        );

        let resp = call(
            stub.clone(),
            Some(admin_token()),
            json!({ "title": "Site", "description": "d", "technologies": ["Rust"], "githubUrl": "g" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let draft = stub.created().unwrap();
        assert_eq!(draft.technologies, vec!["Rust"]);
        assert_eq!(draft.github_url.as_deref(), Some("g"));
    }

    #[actix_web::test]
    async fn rejects_without_session() {
        let stub = Arc::new(StubProjectCatalog::default());

        let resp = call(stub.clone(), None, json!({ "title": "Site", "description": "d" })).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(stub.created().is_none());
    }

    #[actix_web::test]
    async fn validation_error_is_400() {
        let stub = Arc::new(StubProjectCatalog::default().with_single(Err(
            ProjectError::Validation(ProjectValidationError::MissingTitleOrDescription),
        )));

        let resp = call(stub, Some(admin_token()), json!({ "title": "Site" })).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "title and description are required");
    }

    #[actix_web::test]
    async fn non_string_technologies_is_400() {
        let stub = Arc::new(StubProjectCatalog::default());

        let resp = call(
            stub.clone(),
            Some(admin_token()),
            json!({ "title": "Site", "description": "d", "technologies": [1, 2] }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(stub.created().is_none());
    }
}
