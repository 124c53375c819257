use crate::{
    abstract_trait::{
        image::repository::DynProductImageCommandRepository,
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::ProductCommandServiceTrait,
        },
    },
    domain::{
        requests::{
            image::ImageUpsert,
            lenient::Patch,
            product::{CreateProductRequest, NewProduct, ProductChanges, UpdateProductRequest},
        },
        response::{api::ApiResponse, product::ProductResponse},
    },
    model::{product::Product as ProductModel, status::ImageProvider},
    service::{image::attach_primary, repo_failure},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer, TracingContext},
};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductCommandServiceDeps {
    pub command: DynProductCommandRepository,
    pub query: DynProductQueryRepository,
    pub images: DynProductImageCommandRepository,
}

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    query: DynProductQueryRepository,
    images: DynProductImageCommandRepository,
    tracer: ServiceTracer,
}

impl ProductCommandService {
    pub fn new(deps: ProductCommandServiceDeps, registry: &mut Registry) -> Self {
        let ProductCommandServiceDeps {
            command,
            query,
            images,
        } = deps;

        Self {
            command,
            query,
            images,
            tracer: ServiceTracer::new("product-command-service", registry),
        }
    }

    /// Applies the form's image field and returns the refreshed projection.
    async fn apply_image(
        &self,
        product: ProductModel,
        image_url: &Patch<String>,
    ) -> Result<ProductModel, RepositoryError> {
        match image_url.non_blank() {
            Some(url) => {
                let upsert =
                    ImageUpsert::new(product.id, url, Some(ImageProvider::for_url(url)), None);
                attach_primary(&self.images, &upsert).await?;
            }
            None if image_url.is_missing() => return Ok(product),
            None => self.images.clear_primary(product.id).await?,
        }

        self.query
            .find_by_id(product.id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    fn fail(&self, ctx: &TracingContext, method: Method, context: &str, e: RepositoryError) -> ServiceError {
        let (msg, err) = repo_failure(context, e);
        error!("❌ {msg}");
        self.tracer.failure(ctx, method, &msg);
        err
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = NewProduct::try_from(req)?;
        info!("🆕 Creating product: {}", product.name);

        let tracing_ctx = self.tracer.start(
            "product_create",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.name", product.name.clone()),
            ],
        );

        let created = match self.command.create_product(&product).await {
            Ok(created) => created,
            Err(e) => return Err(self.fail(&tracing_ctx, Method::Post, "Failed to create product", e)),
        };

        let created = match self.apply_image(created, &req.image_url).await {
            Ok(created) => created,
            Err(e) => {
                return Err(self.fail(&tracing_ctx, Method::Post, "Failed to attach product image", e));
            }
        };

        self.tracer
            .success(&tracing_ctx, Method::Post, "Product created");

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(created),
        ))
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let id = req.id.ok_or_else(|| ServiceError::field("id", "Required"))?;
        let changes = ProductChanges::try_from(req)?;
        info!("🔄 Updating product ID: {id}");

        let tracing_ctx = self.tracer.start(
            "product_update",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let updated = match self.command.update_product(id, &changes).await {
            Ok(updated) => updated,
            Err(e) => return Err(self.fail(&tracing_ctx, Method::Put, "Failed to update product", e)),
        };

        let updated = match self.apply_image(updated, &req.image_url).await {
            Ok(updated) => updated,
            Err(e) => {
                return Err(self.fail(&tracing_ctx, Method::Put, "Failed to update product image", e));
            }
        };

        self.tracer
            .success(&tracing_ctx, Method::Put, "Product updated");

        Ok(ApiResponse::success(
            "Product updated successfully",
            ProductResponse::from(updated),
        ))
    }

    async fn delete_product(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product ID: {id}");

        let tracing_ctx = self.tracer.start(
            "product_delete",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        if let Err(e) = self.command.delete_product(id).await {
            return Err(self.fail(&tracing_ctx, Method::Delete, "Failed to delete product", e));
        }

        self.tracer
            .success(&tracing_ctx, Method::Delete, "Product deleted");

        Ok(ApiResponse::success("Product deleted successfully", ()))
    }
}
