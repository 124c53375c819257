use crate::{
    abstract_trait::auth::{AdminSeed, AuthServiceTrait, DynAdminUserRepository},
    domain::{
        requests::auth::LoginRequest,
        response::{
            api::ApiResponse,
            auth::{AdminResponse, TokenResponse},
        },
    },
    service::repo_failure,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

pub const ACCESS_TOKEN: &str = "access";
const ADMIN_ROLE: &str = "ADMIN";

#[derive(Clone)]
pub struct AuthServiceDeps {
    pub admins: DynAdminUserRepository,
    pub hashing: DynHashing,
    pub jwt: DynJwtService,
    pub token_ttl_secs: i64,
}

#[derive(Clone)]
pub struct AuthService {
    admins: DynAdminUserRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
    token_ttl_secs: i64,
    tracer: ServiceTracer,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps, registry: &mut Registry) -> Self {
        let AuthServiceDeps {
            admins,
            hashing,
            jwt,
            token_ttl_secs,
        } = deps;

        Self {
            admins,
            hashing,
            jwt,
            token_ttl_secs,
            tracer: ServiceTracer::new("auth-service", registry),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        req.validate()?;
        let email = normalize_email(&req.email);
        info!("🔐 Login attempt for {email}");

        let tracing_ctx = self.tracer.start(
            "auth_login",
            vec![KeyValue::new("component", "auth")],
        );

        let admin = match self.admins.find_by_email(&email).await {
            Ok(Some(admin)) => admin,
            Ok(None) => {
                warn!("⚠️ Unknown admin {email}");
                self.tracer
                    .failure(&tracing_ctx, Method::Post, "Invalid credentials");
                return Err(ServiceError::InvalidCredentials);
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to look up admin", e);
                error!("❌ {msg}");
                self.tracer.failure(&tracing_ctx, Method::Post, &msg);
                return Err(err);
            }
        };

        if let Err(e) = self
            .hashing
            .compare_password(&admin.password_hash, &req.password)
            .await
        {
            self.tracer
                .failure(&tracing_ctx, Method::Post, "Invalid credentials");
            return Err(match e {
                ServiceError::Bcrypt(_) | ServiceError::InvalidCredentials => {
                    ServiceError::InvalidCredentials
                }
                other => other,
            });
        }

        let access_token = match self.jwt.generate_token(admin.id, ACCESS_TOKEN) {
            Ok(token) => token,
            Err(e) => {
                self.tracer
                    .failure(&tracing_ctx, Method::Post, "Token generation failed");
                return Err(e);
            }
        };

        self.tracer
            .success(&tracing_ctx, Method::Post, "Admin logged in");

        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse {
                access_token,
                token_type: "Bearer".to_string(),
                expires_in: self.token_ttl_secs,
                admin: AdminResponse::from(admin),
            },
        ))
    }

    async fn get_me(&self, id: Uuid) -> Result<ApiResponse<AdminResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "auth_me",
            vec![KeyValue::new("admin.id", id.to_string())],
        );

        match self.admins.find_by_id(id).await {
            Ok(Some(admin)) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Admin retrieved");
                Ok(ApiResponse::success(
                    "Admin retrieved successfully",
                    AdminResponse::from(admin),
                ))
            }
            Ok(None) => {
                self.tracer
                    .failure(&tracing_ctx, Method::Get, "Admin no longer exists");
                Err(ServiceError::Unauthorized)
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to fetch admin", e);
                self.tracer.failure(&tracing_ctx, Method::Get, &msg);
                Err(err)
            }
        }
    }

    async fn seed_admin(&self, email: &str, password: &str) -> Result<AdminResponse, ServiceError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(ServiceError::field("email", "Admin email and password are required"));
        }

        let password_hash = self.hashing.hash_password(password).await?;

        let admin = self
            .admins
            .upsert_admin(&AdminSeed {
                id: Uuid::new_v4(),
                email,
                name: Some("Admin".to_string()),
                password_hash,
                role: ADMIN_ROLE.to_string(),
            })
            .await?;

        info!("🌱 Admin {} seeded", admin.email);
        Ok(AdminResponse::from(admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use shared::config::{Hashing, JwtConfig};
    use std::sync::Arc;

    fn service() -> AuthService {
        let mut registry = Registry::default();
        AuthService::new(
            AuthServiceDeps {
                admins: Arc::new(MemoryStore::new()),
                hashing: Arc::new(Hashing::with_cost(4)),
                jwt: Arc::new(JwtConfig::new("test-secret", 60)),
                token_ttl_secs: 3600,
            },
            &mut registry,
        )
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn seeded_admin_can_log_in() {
        let service = service();
        let admin = service
            .seed_admin(" Admin@Example.com ", "hunter22")
            .await
            .expect("seed");
        assert_eq!(admin.email, "admin@example.com");

        let response = service
            .login(&login("admin@example.com", "hunter22"))
            .await
            .expect("login");
        assert_eq!(response.data.admin.id, admin.id);
        assert_eq!(response.data.expires_in, 3600);

        let me = service.get_me(admin.id).await.expect("me");
        assert_eq!(me.data.role, "ADMIN");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let service = service();
        service
            .seed_admin("admin@example.com", "hunter22")
            .await
            .expect("seed");

        assert!(matches!(
            service.login(&login("admin@example.com", "nope")).await,
            Err(ServiceError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login(&login("ghost@example.com", "hunter22")).await,
            Err(ServiceError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn reseeding_rotates_the_password() {
        let service = service();
        service.seed_admin("admin@example.com", "first-pass").await.expect("seed");
        service.seed_admin("admin@example.com", "second-pass").await.expect("reseed");

        assert!(service.login(&login("admin@example.com", "first-pass")).await.is_err());
        assert!(service.login(&login("admin@example.com", "second-pass")).await.is_ok());
    }
}
