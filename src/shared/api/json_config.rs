// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::web::JsonConfig;

/// Content documents carry long markdown bodies, so the limit sits above
/// actix's 2 MiB default.
pub const MAX_JSON_BODY_BYTES: usize = 4 * 1024 * 1024;

/// JSON extractor config for every route: bodies that fail to parse come
/// back in the `ApiResponse` envelope instead of actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, req| {
            tracing::debug!(path = %req.path(), error = %err, "Rejected JSON body");
            let response = match &err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    ApiResponse::error(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "PAYLOAD_TOO_LARGE",
                        "Request body is too large",
                    )
                }
                JsonPayloadError::ContentType => ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    "Expected a JSON body (Content-Type: application/json)",
                ),
                _ => ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    &format!("Invalid JSON body: {err}"),
                ),
            };
            InternalError::from_response(err, response).into()
        })
}
