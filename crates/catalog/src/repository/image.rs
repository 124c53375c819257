use crate::{
    abstract_trait::image::repository::{
        ProductImageCommandRepositoryTrait, ProductImageQueryRepositoryTrait,
    },
    domain::requests::image::ImageUpsert,
    model::product_image::ProductImage as ProductImageModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

const IMAGE_COLUMNS: &str = "id, product_id, url, provider, public_id, is_primary, created_at";

#[derive(Clone)]
pub struct ProductImageRepository {
    db: ConnectionPool,
}

impl ProductImageRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductImageQueryRepositoryTrait for ProductImageRepository {
    async fn find_by_product(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductImageModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "SELECT {IMAGE_COLUMNS} FROM product_images WHERE product_id = $1 ORDER BY created_at DESC, id"
        );

        sqlx::query_as::<_, ProductImageModel>(&sql)
            .bind(product_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch images of product {product_id}: {:?}", e);
                RepositoryError::from(e)
            })
    }
}

#[async_trait]
impl ProductImageCommandRepositoryTrait for ProductImageRepository {
    async fn upsert_image(
        &self,
        image: &ImageUpsert,
    ) -> Result<ProductImageModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            INSERT INTO product_images (id, product_id, url, provider, public_id, is_primary, created_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, now())
            ON CONFLICT (product_id, url) DO UPDATE
                SET provider = COALESCE(EXCLUDED.provider, product_images.provider),
                    public_id = COALESCE(EXCLUDED.public_id, product_images.public_id)
            RETURNING {IMAGE_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, ProductImageModel>(&sql)
            .bind(image.id)
            .bind(image.product_id)
            .bind(&image.url)
            .bind(image.provider.map(|p| p.as_str()))
            .bind(&image.public_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to upsert image {} for product {}: {:?}",
                    image.url, image.product_id, err
                );
                RepositoryError::from(err)
            })?;

        info!("🖼️ Upserted image {} for product {}", result.id, result.product_id);
        Ok(result)
    }

    async fn set_primary(
        &self,
        product_id: Uuid,
        image_id: Uuid,
    ) -> Result<ProductImageModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // clear first: the partial unique index allows one primary per product
        sqlx::query(
            "UPDATE product_images SET is_primary = FALSE WHERE product_id = $1 AND is_primary AND id <> $2",
        )
        .bind(product_id)
        .bind(image_id)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let sql = format!(
            "UPDATE product_images SET is_primary = TRUE WHERE id = $1 AND product_id = $2 RETURNING {IMAGE_COLUMNS}"
        );

        let image = sqlx::query_as::<_, ProductImageModel>(&sql)
            .bind(image_id)
            .bind(product_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?
            .ok_or(RepositoryError::NotFound)?;

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit primary image for product {product_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("⭐ Image {image_id} is now primary for product {product_id}");
        Ok(image)
    }

    async fn clear_primary(&self, product_id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("UPDATE product_images SET is_primary = FALSE WHERE product_id = $1 AND is_primary")
            .bind(product_id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to clear primary image of product {product_id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        Ok(())
    }

    async fn delete_image(&self, product_id: Uuid, image_id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM product_images WHERE id = $1 AND product_id = $2")
            .bind(image_id)
            .bind(product_id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted image {image_id} of product {product_id}");
        Ok(())
    }
}
