use crate::domain::requests::lenient::{Checks, Patch, Presence};
use serde::Deserialize;
use shared::errors::ServiceError;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "Moda Praia")]
    pub name: Patch<String>,

    /// Derived from the name when absent.
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "praia")]
    pub slug: Patch<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[serde(skip)]
    pub id: Option<Uuid>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub slug: Patch<String>,
}

fn check_slug(checks: &mut Checks, slug: &Patch<String>, presence: Presence) {
    if let Some(value) = checks.present("slug", slug, presence) {
        if !value.is_empty() && !is_slug(value) {
            checks.fail(
                "slug",
                "slug",
                "Use lowercase letters, digits and single hyphens",
            );
        }
    }
}

impl Validate for CreateCategoryRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = Checks::default();
        checks.text("name", &self.name, Presence::Required, 2, 80);
        check_slug(&mut checks, &self.slug, Presence::Nullable);
        if let Some(name) = self.name.value() {
            if self.slug.non_blank().is_none() && name.chars().count() >= 2 && slugify(name).is_empty() {
                checks.fail("slug", "slug", "Cannot derive a slug from this name");
            }
        }
        checks.finish()
    }
}

impl Validate for UpdateCategoryRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = Checks::default();
        checks.text("name", &self.name, Presence::Optional, 2, 80);
        check_slug(&mut checks, &self.slug, Presence::Optional);
        checks.finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl NewCategory {
    pub fn new(name: &str, slug: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }
}

impl TryFrom<&CreateCategoryRequest> for NewCategory {
    type Error = ServiceError;

    fn try_from(req: &CreateCategoryRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        let name = req.name.value().cloned().unwrap_or_default();
        let slug = req
            .slug
            .non_blank()
            .cloned()
            .unwrap_or_else(|| slugify(&name));

        Ok(NewCategory {
            id: Uuid::new_v4(),
            name,
            slug,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl TryFrom<&UpdateCategoryRequest> for CategoryChanges {
    type Error = ServiceError;

    fn try_from(req: &UpdateCategoryRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        Ok(CategoryChanges {
            name: req.name.value().cloned(),
            slug: req.slug.non_blank().cloned(),
        })
    }
}

pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Lowercase ASCII slug; common Latin accents are folded first.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        let folded = match ch {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        };

        if folded.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(folded);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slugify_folds_accents_and_separators() {
        assert_eq!(slugify("Roupas de Academia"), "roupas-de-academia");
        assert_eq!(slugify("  Sex   Shop! "), "sex-shop");
        assert_eq!(slugify("Calçados & Acessórios"), "calcados-acessorios");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slug_is_derived_when_absent() {
        let req: CreateCategoryRequest =
            serde_json::from_value(json!({"name": "Moda Praia"})).expect("payload");
        let category = NewCategory::try_from(&req).expect("valid");
        assert_eq!(category.slug, "moda-praia");
    }

    #[test]
    fn explicit_slug_must_be_well_formed() {
        let req: CreateCategoryRequest =
            serde_json::from_value(json!({"name": "Praia", "slug": "Moda Praia"}))
                .expect("payload");
        assert!(req.validate().is_err());
        assert!(is_slug("sex-shop"));
        assert!(!is_slug("sex--shop"));
    }
}
