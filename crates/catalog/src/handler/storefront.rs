use crate::{
    abstract_trait::storefront::DynStorefrontService,
    domain::response::{api::ApiResponse, storefront::StorefrontResponse},
    state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/storefront",
    tag = "Storefront",
    responses(
        (status = 200, description = "Active products grouped by category", body = ApiResponse<StorefrontResponse>)
    )
)]
pub async fn get_storefront(
    Extension(service): Extension<DynStorefrontService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.catalog().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn storefront_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/storefront", get(get_storefront))
        .layer(Extension(app_state.di_container.storefront_service.clone()))
}
