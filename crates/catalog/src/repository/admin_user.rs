use crate::{
    abstract_trait::auth::{AdminSeed, AdminUserRepositoryTrait},
    model::admin_user::AdminUser,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

const ADMIN_COLUMNS: &str = "id, email, name, password_hash, role, created_at, updated_at";

#[derive(Clone)]
pub struct AdminUserRepository {
    db: ConnectionPool,
}

impl AdminUserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminUserRepositoryTrait for AdminUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {ADMIN_COLUMNS} FROM admin_users WHERE email = $1");

        sqlx::query_as::<_, AdminUser>(&sql)
            .bind(email)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to look up admin by email: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminUser>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {ADMIN_COLUMNS} FROM admin_users WHERE id = $1");

        sqlx::query_as::<_, AdminUser>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)
    }

    async fn upsert_admin(&self, admin: &AdminSeed) -> Result<AdminUser, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            INSERT INTO admin_users (id, email, name, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, now(), now())
            ON CONFLICT (email) DO UPDATE
                SET password_hash = EXCLUDED.password_hash,
                    role = EXCLUDED.role,
                    updated_at = now()
            RETURNING {ADMIN_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, AdminUser>(&sql)
            .bind(admin.id)
            .bind(&admin.email)
            .bind(&admin.name)
            .bind(&admin.password_hash)
            .bind(&admin.role)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to upsert admin {}: {:?}", admin.email, err);
                RepositoryError::from(err)
            })?;

        info!("👤 Admin {} ready", result.email);
        Ok(result)
    }
}
