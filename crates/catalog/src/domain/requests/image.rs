use crate::{
    domain::requests::lenient::{Checks, Patch, Presence},
    model::status::ImageProvider,
};
use serde::Deserialize;
use shared::errors::ServiceError;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachImageRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "https://res.cloudinary.com/demo/image/upload/a.jpg")]
    pub url: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<ImageProvider>)]
    pub provider: Patch<ImageProvider>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub public_id: Patch<String>,
}

impl Validate for AttachImageRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = Checks::default();
        checks.image_url("url", &self.url, Presence::Required);
        checks.present("provider", &self.provider, Presence::Nullable);
        checks.text("publicId", &self.public_id, Presence::Nullable, 0, 255);
        checks.finish()
    }
}

/// Upsert key is (product, url). On conflict only provided fields change.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpsert {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub provider: Option<ImageProvider>,
    pub public_id: Option<String>,
}

impl ImageUpsert {
    pub fn new(
        product_id: Uuid,
        url: impl Into<String>,
        provider: Option<ImageProvider>,
        public_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            url: url.into(),
            provider,
            public_id,
        }
    }

    pub fn from_request(product_id: Uuid, req: &AttachImageRequest) -> Result<Self, ServiceError> {
        req.validate()?;

        let url = req.url.value().cloned().unwrap_or_default();
        Ok(Self::new(
            product_id,
            url,
            req.provider.value().copied(),
            req.public_id.non_blank().cloned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_and_public_id_are_optional() {
        let req: AttachImageRequest = serde_json::from_value(json!({
            "url": " /uploads/a.png ",
            "provider": "LOCAL"
        }))
        .expect("payload");

        let upsert = ImageUpsert::from_request(Uuid::new_v4(), &req).expect("valid");
        assert_eq!(upsert.url, "/uploads/a.png");
        assert_eq!(upsert.provider, Some(ImageProvider::Local));
        assert_eq!(upsert.public_id, None);
    }

    #[test]
    fn url_is_required() {
        let req: AttachImageRequest =
            serde_json::from_value(json!({"provider": "external"})).expect("payload");
        assert!(ImageUpsert::from_request(Uuid::new_v4(), &req).is_err());
    }
}
