use crate::{
    abstract_trait::upload::DynUploadService,
    domain::{requests::upload::UploadRequest, response::upload::UploadResponse},
    middleware::jwt::auth_middleware,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Multipart},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

/// Shape of the multipart form, for the API docs only.
#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub product_id: Option<Uuid>,
}

fn invalid_form(err: impl std::fmt::Debug) -> HttpError {
    debug!("📭 Unreadable upload form: {err:?}");
    HttpError::BadRequest("Invalid form data".to_string())
}

/// Collects the `file` and `productId` fields; anything else is ignored.
/// Only the first `file` part counts.
async fn read_form(mut multipart: Multipart) -> Result<UploadRequest, HttpError> {
    let mut product_id = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        match field.name() {
            Some("productId") => {
                let raw = field.text().await.map_err(invalid_form)?;
                let raw = raw.trim();
                if !raw.is_empty() {
                    let id = Uuid::parse_str(raw)
                        .map_err(|_| HttpError::BadRequest("Invalid productId".to_string()))?;
                    product_id = Some(id);
                }
            }
            Some("file") if file.is_none() => {
                let file_name = field.file_name().map(str::to_owned);
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await.map_err(invalid_form)?;
                file = Some((file_name, content_type, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let (file_name, content_type, bytes) =
        file.ok_or_else(|| HttpError::BadRequest("File not sent".to_string()))?;

    Ok(UploadRequest {
        product_id,
        file_name,
        content_type,
        bytes,
    })
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Upload",
    security(("bearer_auth" = [])),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored", body = UploadResponse),
        (status = 400, description = "Missing file, disallowed type or file too large"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found"),
        (status = 502, description = "Image host unreachable or rejected the upload")
    )
)]
pub async fn upload_image(
    Extension(service): Extension<DynUploadService>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let request = read_form(multipart).await?;
    let response = service.upload(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn upload_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/upload", post(upload_image))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.upload_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
