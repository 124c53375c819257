use crate::{
    abstract_trait::auth::DynAuthService,
    domain::{
        requests::auth::LoginRequest,
        response::{
            api::ApiResponse,
            auth::{AdminResponse, TokenResponse},
        },
    },
    middleware::{
        jwt::{TOKEN_COOKIE, auth_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login_handler(
    Extension(service): Extension<DynAuthService>,
    jar: CookieJar,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;
    let jar = jar.add(session_cookie(response.data.access_token.clone()));

    Ok((StatusCode::OK, jar, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current admin", body = ApiResponse<AdminResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn get_me_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(admin_id): Extension<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_me(admin_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Session cookie cleared")),
    tag = "Auth"
)]
pub async fn logout_handler(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/"));

    (
        StatusCode::OK,
        jar,
        Json(json!({ "status": "success", "message": "Logged out" })),
    )
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/logout", post(logout_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/auth/me", get(get_me_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(private_routes)
}
