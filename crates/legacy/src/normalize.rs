//! Load-time repair of untrusted catalog JSON.
//!
//! Anything that is not a recognised category is dropped, entries that are not
//! objects are dropped, text fields are coerced and capped, and every list is
//! re-ranked densely after ordering by the incoming `sortIndex`.

use crate::{
    category::CategoryKey,
    defaults::{DEFAULT_TAG, default_document, fallback_image},
    document::{CatalogDocument, CatalogItem},
    ids::make_id,
};
use serde_json::{Map, Value};
use std::collections::HashSet;

pub const NAME_MAX: usize = 120;
pub const DESCRIPTION_MAX: usize = 240;
pub const TAG_MAX: usize = 40;

/// Stringifies truthy values; falsy ones (`null`, `false`, `0`, `""`) yield `None`.
fn coerce(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(false) => None,
        other => Some(other.to_string()),
    }
}

fn field<'a>(entry: &'a Map<String, Value>, name: &str, alias: &str) -> Option<&'a Value> {
    entry.get(name).or_else(|| entry.get(alias))
}

pub fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

fn normalize_entry(entry: &Map<String, Value>) -> CatalogItem {
    let name = truncate(
        &coerce(field(entry, "name", "nome")).unwrap_or_default(),
        NAME_MAX,
    );
    let description = truncate(
        &coerce(field(entry, "description", "desc")).unwrap_or_default(),
        DESCRIPTION_MAX,
    );
    let tag = truncate(
        &coerce(entry.get("tag")).unwrap_or_else(|| DEFAULT_TAG.to_string()),
        TAG_MAX,
    );
    let image = coerce(field(entry, "image", "img")).unwrap_or_else(|| fallback_image(&name));

    CatalogItem {
        id: coerce(entry.get("id")).unwrap_or_default(),
        name,
        description,
        tag,
        image,
        sort_index: 0,
    }
}

fn normalize_list(value: Option<&Value>) -> Vec<CatalogItem> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };

    let mut ranked: Vec<(f64, CatalogItem)> = entries
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let entry = entry.as_object()?;
            let rank = entry
                .get("sortIndex")
                .and_then(Value::as_f64)
                .unwrap_or(position as f64);
            Some((rank, normalize_entry(entry)))
        })
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, (_, mut item))| {
            item.sort_index = rank;
            item
        })
        .collect()
}

/// Gives every item an id that is unique across the whole document.
pub fn dedupe_ids(doc: &mut CatalogDocument) {
    let mut seen = HashSet::new();
    for key in CategoryKey::ALL {
        for item in doc.list_mut(key) {
            while item.id.is_empty() || seen.contains(&item.id) {
                item.id = make_id();
            }
            seen.insert(item.id.clone());
        }
    }
}

/// Never fails: a non-object root yields the sample document.
pub fn normalize(raw: &Value) -> CatalogDocument {
    let Value::Object(root) = raw else {
        return default_document();
    };

    let mut doc = CatalogDocument::default();
    for key in CategoryKey::ALL {
        *doc.list_mut(key) = normalize_list(root.get(key.as_str()));
    }
    dedupe_ids(&mut doc);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_root_falls_back_to_samples() {
        for raw in [json!(null), json!([1, 2]), json!("catalog"), json!(3)] {
            assert_eq!(normalize(&raw).len(), 12);
        }
    }

    #[test]
    fn unknown_categories_and_malformed_entries_are_dropped() {
        let doc = normalize(&json!({
            "academia": "not a list",
            "praia": [null, 4, "x", {"nome": "Biquíni", "desc": "Azul"}],
            "shoes": [{"name": "Boot"}],
        }));

        assert!(doc.academia.is_empty());
        assert!(doc.lingerie.is_empty());
        assert_eq!(doc.praia.len(), 1);

        let item = &doc.praia[0];
        assert_eq!(item.name, "Biquíni");
        assert_eq!(item.description, "Azul");
        assert_eq!(item.tag, DEFAULT_TAG);
        assert!(item.image.starts_with("data:image/svg+xml"));
        assert!(item.id.starts_with("p_"));
    }

    #[test]
    fn text_fields_are_capped_by_characters() {
        let doc = normalize(&json!({
            "lingerie": [{
                "name": "é".repeat(200),
                "description": "d".repeat(300),
                "tag": "t".repeat(50),
                "image": "https://cdn.example/x.png",
            }]
        }));

        let item = &doc.lingerie[0];
        assert_eq!(item.name.chars().count(), NAME_MAX);
        assert_eq!(item.description.len(), DESCRIPTION_MAX);
        assert_eq!(item.tag.len(), TAG_MAX);
        assert_eq!(item.image, "https://cdn.example/x.png");
    }

    #[test]
    fn falsy_values_take_defaults() {
        let doc = normalize(&json!({
            "sexshop": [{"id": 0, "name": false, "tag": "", "image": null, "description": 42}]
        }));

        let item = &doc.sexshop[0];
        assert_eq!(item.name, "");
        assert_eq!(item.description, "42");
        assert_eq!(item.tag, DEFAULT_TAG);
        assert!(item.image.contains("Product"));
        assert!(item.id.starts_with("p_"));
    }

    #[test]
    fn lists_follow_incoming_rank_then_become_dense() {
        let doc = normalize(&json!({
            "academia": [
                {"id": "c", "name": "C", "sortIndex": 9},
                {"id": "a", "name": "A", "sortIndex": -1},
                {"id": "b", "name": "B"},
            ]
        }));

        let order: Vec<(&str, usize)> = doc
            .academia
            .iter()
            .map(|i| (i.id.as_str(), i.sort_index))
            .collect();
        assert_eq!(order, vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn duplicate_ids_are_regenerated_across_categories() {
        let doc = normalize(&json!({
            "academia": [{"id": "same", "name": "A"}],
            "praia": [{"id": "same", "name": "B"}, {"id": "same", "name": "C"}],
        }));

        assert_eq!(doc.academia[0].id, "same");
        assert_ne!(doc.praia[0].id, "same");
        assert_ne!(doc.praia[1].id, "same");
        assert_ne!(doc.praia[0].id, doc.praia[1].id);
    }
}
