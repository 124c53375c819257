use crate::{
    abstract_trait::image::service::DynProductImageService,
    domain::{
        requests::image::AttachImageRequest,
        response::{api::ApiResponse, image::ProductImageResponse},
    },
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/products/{id}/images",
    tag = "Product Image",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Images, newest first", body = ApiResponse<Vec<ProductImageResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_images(
    Extension(service): Extension<DynProductImageService>,
    Path(product_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_product(product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/images",
    tag = "Product Image",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = AttachImageRequest,
    responses(
        (status = 201, description = "Image stored and made primary", body = ApiResponse<ProductImageResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn attach_image(
    Extension(service): Extension<DynProductImageService>,
    Path(product_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<AttachImageRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.attach_image(product_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}/images/{image_id}/primary",
    tag = "Product Image",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Product ID"),
        ("image_id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Primary image changed", body = ApiResponse<ProductImageResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Image not found for this product")
    )
)]
pub async fn set_primary_image(
    Extension(service): Extension<DynProductImageService>,
    Path((product_id, image_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.set_primary(product_id, image_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}/images/{image_id}",
    tag = "Product Image",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Product ID"),
        ("image_id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Image not found for this product")
    )
)]
pub async fn delete_image(
    Extension(service): Extension<DynProductImageService>,
    Path((product_id, image_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_image(product_id, image_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn image_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products/{id}/images", get(get_images).post(attach_image))
        .route(
            "/api/products/{id}/images/{image_id}/primary",
            put(set_primary_image),
        )
        .route("/api/products/{id}/images/{image_id}", delete(delete_image))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.image_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
