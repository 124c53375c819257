use crate::{
    abstract_trait::customer::service::{DynCustomerCommandService, DynCustomerQueryService},
    domain::{
        requests::{
            customer::{CreateCustomerRequest, UpdateCustomerRequest},
            filter::ListQuery,
        },
        response::{api::ApiResponse, customer::CustomerResponse},
    },
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
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
    path = "/api/customers",
    tag = "Customer",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Customers, newest first", body = ApiResponse<Vec<CustomerResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_customers(
    Extension(service): Extension<DynCustomerQueryService>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customer",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = ApiResponse<CustomerResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customer",
    security(("bearer_auth" = [])),
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_customer(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "Customer",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);

    let response = service.update_customer(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customer",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_customer(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/customers", get(get_customers).post(create_customer))
        .route(
            "/api/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.customer_query.clone()))
        .layer(Extension(app_state.di_container.customer_command.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
