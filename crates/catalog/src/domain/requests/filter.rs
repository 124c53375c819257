use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Case-insensitive text matched against the listed display fields.
    #[serde(default)]
    pub q: Option<String>,
}

impl ListQuery {
    pub fn needle(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

/// True when any field contains the lowercase needle.
pub fn matches_any(needle: &str, fields: &[Option<&str>]) -> bool {
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}
