use crate::{
    abstract_trait::{
        image::repository::DynProductImageCommandRepository,
        product::repository::DynProductQueryRepository,
        storage::{DynImageStorage, ImageFile},
        upload::UploadServiceTrait,
    },
    domain::{
        requests::{image::ImageUpsert, upload::UploadRequest},
        response::upload::UploadResponse,
    },
    service::{image::attach_primary, repo_failure},
    storage::accept_upload,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct UploadServiceDeps {
    pub storage: DynImageStorage,
    pub products: DynProductQueryRepository,
    pub images: DynProductImageCommandRepository,
}

#[derive(Clone)]
pub struct UploadService {
    storage: DynImageStorage,
    products: DynProductQueryRepository,
    images: DynProductImageCommandRepository,
    tracer: ServiceTracer,
}

impl UploadService {
    pub fn new(deps: UploadServiceDeps, registry: &mut Registry) -> Self {
        let UploadServiceDeps {
            storage,
            products,
            images,
        } = deps;

        Self {
            storage,
            products,
            images,
            tracer: ServiceTracer::new("upload-service", registry),
        }
    }
}

#[async_trait]
impl UploadServiceTrait for UploadService {
    async fn upload(&self, req: UploadRequest) -> Result<UploadResponse, ServiceError> {
        let mime = accept_upload(
            req.bytes.len(),
            req.content_type.as_deref(),
            req.file_name.as_deref(),
        )?;

        info!(
            "📤 Uploading {} bytes ({mime}) via {}",
            req.bytes.len(),
            self.storage.provider()
        );

        let tracing_ctx = self.tracer.start(
            "image_upload",
            vec![
                KeyValue::new("component", "upload"),
                KeyValue::new("mime", mime.clone()),
                KeyValue::new("provider", self.storage.provider().as_str()),
            ],
        );

        if let Some(product_id) = req.product_id {
            match self.products.find_by_id(product_id).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    self.tracer
                        .failure(&tracing_ctx, Method::Post, "Product not found");
                    return Err(ServiceError::Repo(RepositoryError::NotFound));
                }
                Err(e) => {
                    let (msg, err) = repo_failure("Failed to look up product", e);
                    self.tracer.failure(&tracing_ctx, Method::Post, &msg);
                    return Err(err);
                }
            }
        }

        let file = ImageFile {
            bytes: &req.bytes,
            mime: &mime,
            file_name: req.file_name.as_deref(),
        };

        let stored = match self.storage.store(&file).await {
            Ok(stored) => stored,
            Err(e) => {
                let msg = format!("Storage failed: {e}");
                error!("❌ {msg}");
                self.tracer.failure(&tracing_ctx, Method::Post, &msg);
                return Err(e);
            }
        };

        if let Some(product_id) = req.product_id {
            let upsert = ImageUpsert::new(
                product_id,
                stored.url.clone(),
                Some(stored.provider),
                stored.public_id.clone(),
            );

            if let Err(e) = attach_primary(&self.images, &upsert).await {
                let (msg, err) = repo_failure("Failed to record uploaded image", e);
                error!("❌ {msg}");
                self.tracer.failure(&tracing_ctx, Method::Post, &msg);
                return Err(err);
            }
        }

        self.tracer
            .success(&tracing_ctx, Method::Post, "Image uploaded");

        Ok(UploadResponse {
            url: stored.url,
            provider: stored.provider,
            public_id: stored.public_id,
        })
    }
}
