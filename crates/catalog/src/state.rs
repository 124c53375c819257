use crate::{
    abstract_trait::storage::DynImageStorage,
    config::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::Repositories,
    service::storefront::StorefrontSettings,
    storage::{CloudinaryStorage, LocalImageStorage},
};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Hashing, JwtConfig},
};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &Config, repositories: Repositories) -> Self {
        let storage: DynImageStorage = match &config.cloudinary {
            Some(credentials) => {
                info!(
                    "☁️ Image uploads go to the remote host (cloud {})",
                    credentials.cloud_name
                );
                Arc::new(CloudinaryStorage::new(
                    credentials.clone(),
                    Some(config.cloudinary_folder.clone()),
                ))
            }
            None => {
                info!(
                    "💾 Image uploads are written to {}",
                    config.upload_dir.display()
                );
                Arc::new(LocalImageStorage::new(config.upload_dir.clone()))
            }
        };

        Self::with_storage(config, repositories, storage)
    }

    /// Builds the state around an already chosen storage strategy.
    pub fn with_storage(
        config: &Config,
        repositories: Repositories,
        storage: DynImageStorage,
    ) -> Self {
        let jwt_config =
            Arc::new(JwtConfig::new(&config.jwt_secret, config.jwt_ttl_minutes)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(
            DependenciesInjectDeps {
                repositories,
                storage,
                hashing,
                jwt: jwt_config.clone(),
                token_ttl_secs: config.jwt_ttl_minutes * 60,
                storefront: StorefrontSettings {
                    store_name: config.store_name.clone(),
                    whatsapp_phone: config.whatsapp_phone.clone(),
                },
            },
            &mut registry,
        );

        Self {
            jwt_config,
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            upload_dir: config.upload_dir.clone(),
        }
    }
}
