use crate::errors::{
    error::{ErrorResponse, FieldIssue},
    repository::RepositoryError,
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Validation(Vec<FieldIssue>),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    PayloadTooLarge(String),
    BadGateway {
        message: String,
        details: Option<serde_json::Value>,
    },
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Unauthorized
            | ServiceError::Jwt(_)
            | ServiceError::TokenExpired
            | ServiceError::InvalidTokenType => HttpError::Unauthorized("Unauthorized".into()),

            ServiceError::Validation(issues) => HttpError::Validation(issues),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::AlreadyExists(msg) => {
                    HttpError::Conflict(format!("Already exists: {msg}"))
                }
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::UnsupportedMediaType(mime) => HttpError::BadRequest(format!(
                "Unsupported image type '{mime}' (use JPEG, PNG, WebP, HEIC or HEIF)"
            )),

            ServiceError::PayloadTooLarge { limit, .. } => HttpError::BadRequest(format!(
                "File too large (max {} MiB)",
                limit / (1024 * 1024)
            )),

            ServiceError::Upstream { message, details } => {
                HttpError::BadGateway { message, details }
            }

            ServiceError::Bcrypt(_) => {
                HttpError::Internal("Internal authentication error".into())
            }

            ServiceError::Storage(msg) | ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            HttpError::Validation(issues) => {
                let mut body = ErrorResponse::new(FieldIssue::summary(&issues));
                body.issues = Some(issues);
                (StatusCode::BAD_REQUEST, body)
            }
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg)),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, ErrorResponse::new(msg)),
            HttpError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, ErrorResponse::new(msg))
            }
            HttpError::BadGateway { message, details } => {
                let mut body = ErrorResponse::new(message);
                body.details = details;
                (StatusCode::BAD_GATEWAY, body)
            }
            HttpError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, ErrorResponse::new(msg))
            }
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg)),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_failures_collapse_to_uniform_unauthorized() {
        for err in [
            ServiceError::Unauthorized,
            ServiceError::TokenExpired,
            ServiceError::InvalidTokenType,
        ] {
            match HttpError::from(err) {
                HttpError::Unauthorized(msg) => assert_eq!(msg, "Unauthorized"),
                other => panic!("unexpected mapping: {other:?}"),
            }
        }
    }

    #[test]
    fn upstream_maps_to_bad_gateway() {
        let err = HttpError::from(ServiceError::Upstream {
            message: "host rejected upload".into(),
            details: Some(serde_json::json!("Invalid Signature")),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn not_found_and_validation_statuses() {
        let not_found = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let invalid = HttpError::from(ServiceError::field("name", "Required"));
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
