use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::filter::{ListQuery, matches_any},
        response::{api::ApiResponse, product::ProductResponse},
    },
    service::repo_failure,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    tracer: ServiceTracer,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracer: ServiceTracer::new("product-query-service", registry),
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &ListQuery,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let needle = req.needle();
        info!("🔍 Finding all products | Search: '{}'", needle.as_deref().unwrap_or_default());

        let tracing_ctx = self.tracer.start(
            "product_find_all",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("search", needle.clone().unwrap_or_default()),
            ],
        );

        let products = match self.query.find_all().await {
            Ok(products) => products,
            Err(e) => {
                let (msg, err) = repo_failure("Failed to fetch products", e);
                error!("❌ {msg}");
                self.tracer.failure(&tracing_ctx, Method::Get, &msg);
                return Err(err);
            }
        };

        let data: Vec<ProductResponse> = products
            .into_iter()
            .filter(|p| match &needle {
                Some(needle) => matches_any(
                    needle,
                    &[
                        Some(p.name.as_str()),
                        p.description.as_deref(),
                        p.category_name.as_deref(),
                    ],
                ),
                None => true,
            })
            .map(ProductResponse::from)
            .collect();

        info!("✅ Found {} products", data.len());
        self.tracer
            .success(&tracing_ctx, Method::Get, "Products retrieved");

        Ok(ApiResponse::success("Products retrieved successfully", data))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let tracing_ctx = self.tracer.start(
            "product_find_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Product retrieved");
                Ok(ApiResponse::success(
                    "Product retrieved successfully",
                    ProductResponse::from(product),
                ))
            }
            Ok(None) => {
                self.tracer
                    .failure(&tracing_ctx, Method::Get, "Product not found");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to fetch product", e);
                self.tracer.failure(&tracing_ctx, Method::Get, &msg);
                Err(err)
            }
        }
    }
}
