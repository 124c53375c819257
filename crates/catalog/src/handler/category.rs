use crate::{
    abstract_trait::category::service::{DynCategoryCommandService, DynCategoryQueryService},
    domain::{
        requests::category::{CreateCategoryRequest, UpdateCategoryRequest},
        response::{api::ApiResponse, category::CategoryResponse},
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
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Categories by name", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Name or slug already taken")
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_category(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Name or slug already taken")
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);

    let response = service.update_category(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted, its products are now uncategorized"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_category(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/categories", get(get_categories).post(create_category))
        .route(
            "/api/categories/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.category_query.clone()))
        .layer(Extension(app_state.di_container.category_command.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
