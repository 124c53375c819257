use crate::{
    abstract_trait::category::{
        repository::DynCategoryQueryRepository, service::CategoryQueryServiceTrait,
    },
    domain::response::{api::ApiResponse, category::CategoryResponse},
    service::repo_failure,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct CategoryQueryService {
    query: DynCategoryQueryRepository,
    tracer: ServiceTracer,
}

impl CategoryQueryService {
    pub fn new(query: DynCategoryQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracer: ServiceTracer::new("category-query-service", registry),
        }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError> {
        info!("📚 Listing categories");

        let tracing_ctx = self.tracer.start(
            "category_find_all",
            vec![KeyValue::new("component", "category")],
        );

        match self.query.find_all().await {
            Ok(categories) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Categories retrieved");
                let data = categories.into_iter().map(CategoryResponse::from).collect();
                Ok(ApiResponse::success("Categories retrieved successfully", data))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to fetch categories", e);
                self.tracer.failure(&tracing_ctx, Method::Get, &msg);
                Err(err)
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "category_find_by_id",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("category.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(category)) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Category retrieved");
                Ok(ApiResponse::success(
                    "Category retrieved successfully",
                    CategoryResponse::from(category),
                ))
            }
            Ok(None) => {
                self.tracer
                    .failure(&tracing_ctx, Method::Get, "Category not found");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to fetch category", e);
                self.tracer.failure(&tracing_ctx, Method::Get, &msg);
                Err(err)
            }
        }
    }
}
