use crate::{
    abstract_trait::image::{
        repository::{DynProductImageCommandRepository, DynProductImageQueryRepository},
        service::ProductImageServiceTrait,
    },
    domain::{
        requests::image::{AttachImageRequest, ImageUpsert},
        response::{api::ApiResponse, image::ProductImageResponse},
    },
    model::product_image::ProductImage as ProductImageModel,
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

/// Upserts the (product, url) image and makes it the product's primary one.
pub(crate) async fn attach_primary(
    images: &DynProductImageCommandRepository,
    upsert: &ImageUpsert,
) -> Result<ProductImageModel, RepositoryError> {
    let image = images.upsert_image(upsert).await?;
    images.set_primary(image.product_id, image.id).await
}

#[derive(Clone)]
pub struct ProductImageService {
    query: DynProductImageQueryRepository,
    command: DynProductImageCommandRepository,
    tracer: ServiceTracer,
}

impl ProductImageService {
    pub fn new(
        query: DynProductImageQueryRepository,
        command: DynProductImageCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            query,
            command,
            tracer: ServiceTracer::new("product-image-service", registry),
        }
    }
}

#[async_trait]
impl ProductImageServiceTrait for ProductImageService {
    async fn find_by_product(
        &self,
        product_id: Uuid,
    ) -> Result<ApiResponse<Vec<ProductImageResponse>>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "image_find_by_product",
            vec![KeyValue::new("product.id", product_id.to_string())],
        );

        match self.query.find_by_product(product_id).await {
            Ok(images) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Images retrieved");
                let data = images.into_iter().map(ProductImageResponse::from).collect();
                Ok(ApiResponse::success("Images retrieved successfully", data))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to fetch images", e);
                self.tracer.failure(&tracing_ctx, Method::Get, &msg);
                Err(err)
            }
        }
    }

    async fn attach_image(
        &self,
        product_id: Uuid,
        req: &AttachImageRequest,
    ) -> Result<ApiResponse<ProductImageResponse>, ServiceError> {
        let upsert = ImageUpsert::from_request(product_id, req)?;
        info!("🖼️ Attaching {} to product {product_id}", upsert.url);

        let tracing_ctx = self.tracer.start(
            "image_attach",
            vec![
                KeyValue::new("product.id", product_id.to_string()),
                KeyValue::new("image.url", upsert.url.clone()),
            ],
        );

        // a dangling product id surfaces as a foreign key violation
        match attach_primary(&self.command, &upsert).await {
            Ok(image) => {
                self.tracer
                    .success(&tracing_ctx, Method::Post, "Image attached");
                Ok(ApiResponse::success(
                    "Image attached successfully",
                    ProductImageResponse::from(image),
                ))
            }
            Err(RepositoryError::ForeignKey(_)) => {
                self.tracer
                    .failure(&tracing_ctx, Method::Post, "Product not found");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to attach image", e);
                self.tracer.failure(&tracing_ctx, Method::Post, &msg);
                Err(err)
            }
        }
    }

    async fn set_primary(
        &self,
        product_id: Uuid,
        image_id: Uuid,
    ) -> Result<ApiResponse<ProductImageResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "image_set_primary",
            vec![
                KeyValue::new("product.id", product_id.to_string()),
                KeyValue::new("image.id", image_id.to_string()),
            ],
        );

        match self.command.set_primary(product_id, image_id).await {
            Ok(image) => {
                self.tracer
                    .success(&tracing_ctx, Method::Put, "Primary image set");
                Ok(ApiResponse::success(
                    "Primary image updated successfully",
                    ProductImageResponse::from(image),
                ))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to set primary image", e);
                self.tracer.failure(&tracing_ctx, Method::Put, &msg);
                Err(err)
            }
        }
    }

    async fn delete_image(
        &self,
        product_id: Uuid,
        image_id: Uuid,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "image_delete",
            vec![
                KeyValue::new("product.id", product_id.to_string()),
                KeyValue::new("image.id", image_id.to_string()),
            ],
        );

        match self.command.delete_image(product_id, image_id).await {
            Ok(()) => {
                self.tracer
                    .success(&tracing_ctx, Method::Delete, "Image deleted");
                Ok(ApiResponse::success("Image deleted successfully", ()))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to delete image", e);
                self.tracer.failure(&tracing_ctx, Method::Delete, &msg);
                Err(err)
            }
        }
    }
}
