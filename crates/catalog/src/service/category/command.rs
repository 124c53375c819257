use crate::{
    abstract_trait::category::{
        repository::DynCategoryCommandRepository, service::CategoryCommandServiceTrait,
    },
    domain::{
        requests::category::{
            CategoryChanges, CreateCategoryRequest, NewCategory, UpdateCategoryRequest,
        },
        response::{api::ApiResponse, category::CategoryResponse},
    },
    service::repo_failure,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use tracing::{error, info};
use uuid::Uuid;

/// Storefront categories every fresh database starts with, as (slug, name).
pub const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("academia", "Roupas de Academia"),
    ("praia", "Moda Praia"),
    ("lingerie", "Lingerie"),
    ("sex-shop", "Sex Shop"),
];

#[derive(Clone)]
pub struct CategoryCommandService {
    command: DynCategoryCommandRepository,
    tracer: ServiceTracer,
}

impl CategoryCommandService {
    pub fn new(command: DynCategoryCommandRepository, registry: &mut Registry) -> Self {
        Self {
            command,
            tracer: ServiceTracer::new("category-command-service", registry),
        }
    }
}

#[async_trait]
impl CategoryCommandServiceTrait for CategoryCommandService {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = NewCategory::try_from(req)?;
        info!("🆕 Creating category {} ({})", category.name, category.slug);

        let tracing_ctx = self.tracer.start(
            "category_create",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("category.slug", category.slug.clone()),
            ],
        );

        match self.command.create_category(&category).await {
            Ok(created) => {
                self.tracer
                    .success(&tracing_ctx, Method::Post, "Category created");
                Ok(ApiResponse::success(
                    "Category created successfully",
                    CategoryResponse::from(created),
                ))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to create category", e);
                error!("❌ {msg}");
                self.tracer.failure(&tracing_ctx, Method::Post, &msg);
                Err(err)
            }
        }
    }

    async fn update_category(
        &self,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let id = req.id.ok_or_else(|| ServiceError::field("id", "Required"))?;
        let changes = CategoryChanges::try_from(req)?;

        let tracing_ctx = self.tracer.start(
            "category_update",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("category.id", id.to_string()),
            ],
        );

        match self.command.update_category(id, &changes).await {
            Ok(updated) => {
                self.tracer
                    .success(&tracing_ctx, Method::Put, "Category updated");
                Ok(ApiResponse::success(
                    "Category updated successfully",
                    CategoryResponse::from(updated),
                ))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to update category", e);
                error!("❌ {msg}");
                self.tracer.failure(&tracing_ctx, Method::Put, &msg);
                Err(err)
            }
        }
    }

    async fn delete_category(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "category_delete",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("category.id", id.to_string()),
            ],
        );

        match self.command.delete_category(id).await {
            Ok(()) => {
                self.tracer
                    .success(&tracing_ctx, Method::Delete, "Category deleted");
                Ok(ApiResponse::success("Category deleted successfully", ()))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to delete category", e);
                self.tracer.failure(&tracing_ctx, Method::Delete, &msg);
                Err(err)
            }
        }
    }

    async fn seed_defaults(&self) -> Result<usize, ServiceError> {
        for (slug, name) in DEFAULT_CATEGORIES {
            self.command
                .upsert_by_slug(&NewCategory::new(name, slug))
                .await?;
        }

        info!("🌱 Seeded {} default categories", DEFAULT_CATEGORIES.len());
        Ok(DEFAULT_CATEGORIES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::category::repository::CategoryQueryRepositoryTrait,
        repository::MemoryStore,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn seeding_twice_keeps_four_categories() {
        let store = MemoryStore::new();
        let mut registry = Registry::default();
        let service = CategoryCommandService::new(Arc::new(store.clone()), &mut registry);

        service.seed_defaults().await.expect("first seed");
        service.seed_defaults().await.expect("second seed");

        let slugs: Vec<String> = CategoryQueryRepositoryTrait::find_all(&store)
            .await
            .expect("categories")
            .into_iter()
            .map(|c| c.slug)
            .collect();
        assert_eq!(slugs, vec!["lingerie", "praia", "academia", "sex-shop"]);
    }
}
