use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{NewProduct, ProductChanges},
    model::product::Product as ProductModel,
    repository::product::select_products_from,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            WITH written AS (
                INSERT INTO products
                    (id, name, description, price_cents, stock, status, category_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, now(), now())
                RETURNING *
            )
            {}
            "#,
            select_products_from("written")
        );

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price_cents)
            .bind(product.stock)
            .bind(product.status.as_str())
            .bind(product.category_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {}: {:?}", product.name, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created product ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn update_product(
        &self,
        id: Uuid,
        changes: &ProductChanges,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            WITH written AS (
                UPDATE products
                SET name = COALESCE($2, name),
                    description = CASE WHEN $3 THEN $4 ELSE description END,
                    price_cents = COALESCE($5, price_cents),
                    stock = COALESCE($6, stock),
                    status = COALESCE($7, status),
                    category_id = CASE WHEN $8 THEN $9 ELSE category_id END,
                    updated_at = now()
                WHERE id = $1
                RETURNING *
            )
            {}
            "#,
            select_products_from("written")
        );

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .bind(&changes.name)
            .bind(changes.description.is_some())
            .bind(changes.description.clone().flatten())
            .bind(changes.price_cents)
            .bind(changes.stock)
            .bind(changes.status.map(|s| s.as_str()))
            .bind(changes.category_id.is_some())
            .bind(changes.category_id.flatten())
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product ID {id}: {:?}", err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", result.id);
        Ok(result)
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            info!("⚠️ No product deleted, ID {id} not found");
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted product ID {id}");
        Ok(())
    }
}
