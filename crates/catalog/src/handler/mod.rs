mod auth;
mod category;
mod customer;
mod image;
mod product;
mod storefront;
mod upload;

use crate::{
    domain::{
        requests::{
            auth::LoginRequest,
            category::{CreateCategoryRequest, UpdateCategoryRequest},
            customer::{CreateCustomerRequest, UpdateCustomerRequest},
            image::AttachImageRequest,
            product::{CreateProductRequest, UpdateProductRequest},
        },
        response::{
            auth::{AdminResponse, TokenResponse},
            category::CategoryResponse,
            customer::CustomerResponse,
            image::ProductImageResponse,
            product::{CategorySummary, ProductResponse},
            storefront::{StorefrontProduct, StorefrontResponse, StorefrontSection},
            upload::UploadResponse,
        },
    },
    model::status::{ImageProvider, RecordStatus},
    state::AppState,
    storage::PUBLIC_PREFIX,
};
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{errors::ErrorResponse, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;

pub use self::auth::auth_routes;
pub use self::category::category_routes;
pub use self::customer::customer_routes;
pub use self::image::image_routes;
pub use self::product::product_routes;
pub use self::storefront::storefront_routes;
pub use self::upload::upload_routes;

/// Multipart overhead on top of the largest accepted image.
pub const MAX_REQUEST_BYTES: usize = 25 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login_handler,
        auth::get_me_handler,
        auth::logout_handler,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        image::get_images,
        image::attach_image,
        image::set_primary_image,
        image::delete_image,

        customer::get_customers,
        customer::get_customer,
        customer::create_customer,
        customer::update_customer,
        customer::delete_customer,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,

        upload::upload_image,
        storefront::get_storefront,
    ),
    components(schemas(
        LoginRequest,
        CreateProductRequest,
        UpdateProductRequest,
        CreateCustomerRequest,
        UpdateCustomerRequest,
        CreateCategoryRequest,
        UpdateCategoryRequest,
        AttachImageRequest,
        AdminResponse,
        TokenResponse,
        CategorySummary,
        ProductResponse,
        ProductImageResponse,
        CustomerResponse,
        CategoryResponse,
        StorefrontProduct,
        StorefrontSection,
        StorefrontResponse,
        UploadResponse,
        RecordStatus,
        ImageProvider,
        ErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Admin session endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Product Image", description = "Product image endpoints"),
        (name = "Customer", description = "Customer endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Upload", description = "Image upload"),
        (name = "Storefront", description = "Public catalog"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        error!("❌ Failed to encode metrics: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    /// The full application, without binding a socket.
    pub fn build(shared_state: Arc<AppState>) -> Router {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(auth_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(image_routes(shared_state.clone()))
            .merge(customer_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(upload_routes(shared_state.clone()))
            .merge(storefront_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES));

        let (app_router, api) = router_with_layers.split_for_parts();
        let api = Arc::new(api);

        app_router
            .route(
                "/api-docs/openapi.json",
                get(move || {
                    let api = api.clone();
                    async move { Json(api.as_ref().clone()) }
                }),
            )
            .nest_service(PUBLIC_PREFIX, ServeDir::new(&shared_state.upload_dir))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 OpenAPI document: http://localhost:{port}/api-docs/openapi.json");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server terminated unexpectedly")?;

        Ok(())
    }
}
