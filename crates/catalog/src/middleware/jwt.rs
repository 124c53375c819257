use crate::service::auth::ACCESS_TOKEN;
use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::HttpError};
use tracing::debug;

pub const TOKEN_COOKIE: &str = "token";

/// Reads the session token from the `token` cookie or a bearer header.
pub fn extract_token(cookie_jar: &CookieJar, req: &Request<Body>) -> Option<String> {
    cookie_jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
        })
}

pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let unauthorized = || HttpError::Unauthorized("Unauthorized".to_string());

    let token = extract_token(&cookie_jar, &req).ok_or_else(unauthorized)?;

    let admin_id = jwt.verify_token(&token, ACCESS_TOKEN).map_err(|err| {
        debug!("🔒 Rejected session token: {err:?}");
        unauthorized()
    })?;

    req.extensions_mut().insert(admin_id);

    Ok(next.run(req).await)
}
