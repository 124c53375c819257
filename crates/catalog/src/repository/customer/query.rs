use crate::{
    abstract_trait::customer::repository::CustomerQueryRepositoryTrait,
    model::customer::Customer as CustomerModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct CustomerQueryRepository {
    db: ConnectionPool,
}

impl CustomerQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for CustomerQueryRepository {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, RepositoryError> {
        info!("🔍 Fetching all customers");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customers = sqlx::query_as::<_, CustomerModel>(
            r#"
            SELECT id, name, email, phone, notes, status, created_at, updated_at
            FROM customers
            ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customers: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} customers", customers.len());
        Ok(customers)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CustomerModel>(
            r#"
            SELECT id, name, email, phone, notes, status, created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customer {id}: {:?}", e);
            RepositoryError::from(e)
        })
    }
}
