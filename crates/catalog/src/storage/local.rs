use crate::{
    abstract_trait::storage::{ImageFile, ImageStorageTrait, StoredImage},
    model::status::ImageProvider,
    storage::ext_for_mime,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::path::PathBuf;
use tracing::{error, info};
use uuid::Uuid;

pub const PUBLIC_PREFIX: &str = "/uploads";

/// Writes images to a directory served at `/uploads`.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    dir: PathBuf,
}

impl LocalImageStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

#[async_trait]
impl ImageStorageTrait for LocalImageStorage {
    fn provider(&self) -> ImageProvider {
        ImageProvider::Local
    }

    async fn store(&self, file: &ImageFile<'_>) -> Result<StoredImage, ServiceError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            error!("❌ Failed to create upload dir {}: {e}", self.dir.display());
            ServiceError::from(e)
        })?;

        let file_name = format!("{}.{}", Uuid::new_v4(), ext_for_mime(file.mime));
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, file.bytes).await.map_err(|e| {
            error!("❌ Failed to write {}: {e}", path.display());
            ServiceError::from(e)
        })?;

        info!("💾 Stored {} bytes at {}", file.bytes.len(), path.display());

        Ok(StoredImage {
            url: format!("{PUBLIC_PREFIX}/{file_name}"),
            provider: ImageProvider::Local,
            public_id: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_random_file_named_after_mime() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = LocalImageStorage::new(dir.path().join("uploads"));

        let stored = storage
            .store(&ImageFile {
                bytes: b"\x89PNG",
                mime: "image/png",
                file_name: Some("a.png"),
            })
            .await
            .expect("stored");

        assert_eq!(stored.provider, ImageProvider::Local);
        assert!(stored.url.starts_with("/uploads/"));
        assert!(stored.url.ends_with(".png"));

        let name = stored.url.trim_start_matches("/uploads/");
        let written = std::fs::read(dir.path().join("uploads").join(name)).expect("file");
        assert_eq!(written, b"\x89PNG");
    }
}
