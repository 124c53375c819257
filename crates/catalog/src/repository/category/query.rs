use crate::{
    abstract_trait::category::repository::CategoryQueryRepositoryTrait,
    model::category::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CategoryModel>(
            "SELECT id, name, slug, created_at, updated_at FROM categories ORDER BY name ASC",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch categories: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CategoryModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CategoryModel>(
            "SELECT id, name, slug, created_at, updated_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)
    }
}
