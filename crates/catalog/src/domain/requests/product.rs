use crate::{
    domain::requests::lenient::{Checks, Patch, Presence},
    model::status::RecordStatus,
};
use serde::Deserialize;
use shared::errors::ServiceError;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 120;
const DESCRIPTION_MAX: usize = 2000;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "Legging Fitness")]
    pub name: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,

    #[serde(default)]
    #[schema(value_type = i64, example = 12990)]
    pub price_cents: Patch<i64>,

    #[serde(default)]
    #[schema(value_type = i32, example = 10)]
    pub stock: Patch<i64>,

    #[serde(default)]
    #[schema(value_type = Option<RecordStatus>)]
    pub status: Patch<RecordStatus>,

    #[serde(default)]
    #[schema(value_type = Option<Uuid>)]
    pub category_id: Patch<Uuid>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "/uploads/0b6f.jpg")]
    pub image_url: Patch<String>,
}

impl Validate for CreateProductRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = Checks::default();
        checks.text("name", &self.name, Presence::Required, NAME_MIN, NAME_MAX);
        checks.text(
            "description",
            &self.description,
            Presence::Nullable,
            0,
            DESCRIPTION_MAX,
        );
        checks.whole("priceCents", &self.price_cents, Presence::Required, 0, i64::MAX);
        checks.whole("stock", &self.stock, Presence::Required, 0, i32::MAX as i64);
        checks.present("status", &self.status, Presence::Optional);
        checks.present("categoryId", &self.category_id, Presence::Nullable);
        checks.image_url("imageUrl", &self.image_url, Presence::Nullable);
        checks.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(skip)]
    pub id: Option<Uuid>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub price_cents: Patch<i64>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub stock: Patch<i64>,

    #[serde(default)]
    #[schema(value_type = Option<RecordStatus>)]
    pub status: Patch<RecordStatus>,

    #[serde(default)]
    #[schema(value_type = Option<Uuid>)]
    pub category_id: Patch<Uuid>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image_url: Patch<String>,
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = Checks::default();
        checks.text("name", &self.name, Presence::Optional, NAME_MIN, NAME_MAX);
        checks.text(
            "description",
            &self.description,
            Presence::Nullable,
            0,
            DESCRIPTION_MAX,
        );
        checks.whole("priceCents", &self.price_cents, Presence::Optional, 0, i64::MAX);
        checks.whole("stock", &self.stock, Presence::Optional, 0, i32::MAX as i64);
        checks.present("status", &self.status, Presence::Optional);
        checks.present("categoryId", &self.category_id, Presence::Nullable);
        checks.image_url("imageUrl", &self.image_url, Presence::Nullable);
        checks.finish()
    }
}

/// A validated product ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i32,
    pub status: RecordStatus,
    pub category_id: Option<Uuid>,
}

impl TryFrom<&CreateProductRequest> for NewProduct {
    type Error = ServiceError;

    fn try_from(req: &CreateProductRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        Ok(NewProduct {
            id: Uuid::new_v4(),
            name: req.name.value().cloned().unwrap_or_default(),
            description: req.description.non_blank().cloned(),
            price_cents: req.price_cents.value().copied().unwrap_or_default(),
            stock: req
                .stock
                .value()
                .and_then(|s| i32::try_from(*s).ok())
                .unwrap_or_default(),
            status: req.status.value().copied().unwrap_or_default(),
            category_id: req.category_id.value().copied(),
        })
    }
}

/// Field-wise changes; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price_cents: Option<i64>,
    pub stock: Option<i32>,
    pub status: Option<RecordStatus>,
    pub category_id: Option<Option<Uuid>>,
}

impl TryFrom<&UpdateProductRequest> for ProductChanges {
    type Error = ServiceError;

    fn try_from(req: &UpdateProductRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        Ok(ProductChanges {
            name: req.name.value().cloned(),
            description: req.description.to_text_change(),
            price_cents: req.price_cents.value().copied(),
            stock: req.stock.value().and_then(|s| i32::try_from(*s).ok()),
            status: req.status.value().copied(),
            category_id: req.category_id.to_change(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::errors::FieldIssue;

    fn create(value: serde_json::Value) -> CreateProductRequest {
        serde_json::from_value(value).expect("payload")
    }

    fn issues(req: &CreateProductRequest) -> Vec<FieldIssue> {
        match req.validate() {
            Ok(()) => vec![],
            Err(errors) => FieldIssue::from_validation_errors(&errors),
        }
    }

    #[test]
    fn form_strings_normalize_into_typed_product() {
        let req = create(json!({
            "name": "  Legging Fitness  ",
            "description": "",
            "priceCents": "12990",
            "stock": "4"
        }));

        let product = NewProduct::try_from(&req).expect("valid");
        assert_eq!(product.name, "Legging Fitness");
        assert_eq!(product.description, None);
        assert_eq!(product.price_cents, 12990);
        assert_eq!(product.stock, 4);
        assert_eq!(product.status, RecordStatus::Active);
        assert_eq!(product.category_id, None);
    }

    #[test]
    fn reports_every_offending_field() {
        let req = create(json!({
            "name": "x",
            "priceCents": -1,
            "stock": "2.5",
            "status": "DRAFT",
            "imageUrl": "not a url"
        }));

        let paths: Vec<String> = issues(&req).into_iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["name", "priceCents", "stock", "status", "imageUrl"]);
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let found = issues(&create(json!({})));
        assert!(found.contains(&FieldIssue::new("name", "Required")));
        assert!(found.contains(&FieldIssue::new("priceCents", "Required")));
        assert!(found.contains(&FieldIssue::new("stock", "Required")));
    }

    #[test]
    fn try_from_rejects_without_partial_result() {
        let req = create(json!({"name": "Top", "priceCents": "abc", "stock": 1}));
        assert!(matches!(
            NewProduct::try_from(&req),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let req: UpdateProductRequest = serde_json::from_value(json!({
            "description": null,
            "stock": 0
        }))
        .expect("payload");

        let changes = ProductChanges::try_from(&req).expect("valid");
        assert_eq!(changes.name, None);
        assert_eq!(changes.description, Some(None));
        assert_eq!(changes.stock, Some(0));
        assert_eq!(changes.category_id, None);
    }

    #[test]
    fn update_rejects_null_for_required_columns() {
        let req: UpdateProductRequest =
            serde_json::from_value(json!({"name": null})).expect("payload");
        assert!(req.validate().is_err());
    }
}
