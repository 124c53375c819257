use crate::{
    abstract_trait::category::repository::CategoryCommandRepositoryTrait,
    domain::requests::category::{CategoryChanges, NewCategory},
    model::category::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create_category(
        &self,
        category: &NewCategory,
    ) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categories (id, name, slug, created_at, updated_at)
            VALUES ($1, $2, $3, now(), now())
            RETURNING id, name, slug, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.slug)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create category {}: {:?}", category.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created category {} ({})", result.name, result.slug);
        Ok(result)
    }

    async fn upsert_by_slug(
        &self,
        category: &NewCategory,
    ) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categories (id, name, slug, created_at, updated_at)
            VALUES ($1, $2, $3, now(), now())
            ON CONFLICT (slug) DO UPDATE
                SET name = EXCLUDED.name,
                    updated_at = now()
            RETURNING id, name, slug, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.slug)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to upsert category {}: {:?}", category.slug, err);
            RepositoryError::from(err)
        })
    }

    async fn update_category(
        &self,
        id: Uuid,
        changes: &CategoryChanges,
    ) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, slug, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.slug)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category ID {id}: {:?}", err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated category ID {}", result.id);
        Ok(result)
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted category ID {id}");
        Ok(())
    }
}
