use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel, repository::product::select_products_from,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!(
            "{} ORDER BY p.created_at DESC, p.id",
            select_products_from("products")
        );

        let products = sqlx::query_as::<_, ProductModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Retrieved {} products", products.len());
        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("{} WHERE p.id = $1", select_products_from("products"));

        let product = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(product)
    }
}
