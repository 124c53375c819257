use crate::{
    domain::{
        requests::auth::LoginRequest,
        response::{
            api::ApiResponse,
            auth::{AdminResponse, TokenResponse},
        },
    },
    model::admin_user::AdminUser,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynAdminUserRepository = Arc<dyn AdminUserRepositoryTrait + Send + Sync>;
pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

/// Admin account to create or refresh.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub role: String,
}

#[async_trait]
pub trait AdminUserRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminUser>, RepositoryError>;
    /// Keyed by email; an existing row gets the new hash and role.
    async fn upsert_admin(&self, admin: &AdminSeed) -> Result<AdminUser, RepositoryError>;
}

#[async_trait]
pub trait AuthServiceTrait {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn get_me(&self, id: Uuid) -> Result<ApiResponse<AdminResponse>, ServiceError>;
    async fn seed_admin(&self, email: &str, password: &str) -> Result<AdminResponse, ServiceError>;
}
