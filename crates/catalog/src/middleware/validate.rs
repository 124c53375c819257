use axum::extract::{FromRequest, Request};
use shared::errors::{FieldIssue, HttpError};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

/// JSON body that has already passed its `Validate` impl.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!("📭 Rejected request body: {}", rejection.body_text());
                HttpError::BadRequest("Invalid JSON body".to_string())
            })?;

        value
            .validate()
            .map_err(|errors| HttpError::Validation(FieldIssue::from_validation_errors(&errors)))?;

        Ok(Self(value))
    }
}
