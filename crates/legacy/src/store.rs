use crate::{
    category::CategoryKey,
    defaults::{DEFAULT_TAG, default_document, fallback_image},
    document::{CatalogDocument, CatalogItem},
    error::LegacyError,
    ids::make_id,
    normalize::{DESCRIPTION_MAX, NAME_MAX, TAG_MAX, normalize, truncate},
    storage::DocumentStorage,
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Form input for an insert or an edit; `id: None` always inserts.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub tag: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedItem {
    pub category: CategoryKey,
    #[serde(flatten)]
    pub item: CatalogItem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub contents: String,
}

/// Single-writer owner of the catalog document.
///
/// Mutations work on a copy and only replace the held document once the
/// storage write succeeded.
#[derive(Debug)]
pub struct CatalogStore<S> {
    storage: S,
    doc: CatalogDocument,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<S: DocumentStorage> CatalogStore<S> {
    pub fn open(storage: S) -> Result<Self, LegacyError> {
        let raw = storage.read()?;
        let doc = Self::load(raw.as_deref());
        Ok(Self { storage, doc })
    }

    /// Parses a stored value, substituting the sample catalog when unusable.
    pub fn load(raw: Option<&str>) -> CatalogDocument {
        let Some(raw) = raw else {
            debug!("📭 No saved catalog, using the sample document");
            return default_document();
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(value) if value.is_object() => normalize(&value),
            Ok(_) => {
                warn!("⚠️ Saved catalog is not a JSON object, using the sample document");
                default_document()
            }
            Err(e) => {
                warn!("⚠️ Saved catalog is not valid JSON ({e}), using the sample document");
                default_document()
            }
        }
    }

    pub fn document(&self) -> &CatalogDocument {
        &self.doc
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn commit(&mut self, next: CatalogDocument) -> Result<(), LegacyError> {
        let serialized = serde_json::to_string(&next)?;
        self.storage.write(&serialized)?;
        self.doc = next;
        Ok(())
    }

    /// Items by rank; all categories in document order when `category` is `None`.
    pub fn list(&self, category: Option<CategoryKey>) -> Vec<ListedItem> {
        let keys: Vec<CategoryKey> = match category {
            Some(key) => vec![key],
            None => CategoryKey::ALL.to_vec(),
        };

        keys.into_iter()
            .flat_map(|key| {
                let mut items: Vec<ListedItem> = self
                    .doc
                    .list(key)
                    .iter()
                    .map(|item| ListedItem {
                        category: key,
                        item: item.clone(),
                    })
                    .collect();
                items.sort_by_key(|listed| listed.item.sort_index);
                items
            })
            .collect()
    }

    pub fn get(&self, category: CategoryKey, id: &str) -> Option<&CatalogItem> {
        self.doc.list(category).iter().find(|item| item.id == id)
    }

    pub fn find(&self, id: &str) -> Option<ListedItem> {
        let (category, idx) = self.doc.locate(id)?;
        Some(ListedItem {
            category,
            item: self.doc.list(category)[idx].clone(),
        })
    }

    /// Inserts, edits in place, or moves the item to `category` when it lived elsewhere.
    pub fn upsert(
        &mut self,
        category: CategoryKey,
        draft: ItemDraft,
    ) -> Result<CatalogItem, LegacyError> {
        let name = draft.name.trim();
        let description = draft.description.trim();
        if name.is_empty() {
            return Err(LegacyError::Validation("Name is required".into()));
        }
        if description.is_empty() {
            return Err(LegacyError::Validation("Description is required".into()));
        }

        let name = truncate(name, NAME_MAX);
        let description = truncate(description, DESCRIPTION_MAX);
        let tag = truncate(
            &blank_to_none(draft.tag).unwrap_or_else(|| DEFAULT_TAG.to_string()),
            TAG_MAX,
        );
        let image = blank_to_none(draft.image).unwrap_or_else(|| fallback_image(&name));

        let mut next = self.doc.clone();
        let requested_id = blank_to_none(draft.id);
        let existing = requested_id.as_deref().and_then(|id| next.locate(id));

        let item = match existing {
            Some((current, idx)) if current == category => {
                let slot = &mut next.list_mut(category)[idx];
                slot.name = name;
                slot.description = description;
                slot.tag = tag;
                slot.image = image;
                slot.clone()
            }
            other => {
                if let Some((previous, idx)) = other {
                    next.list_mut(previous).remove(idx);
                    next.reindex(previous);
                }
                let id = match requested_id {
                    Some(id) if other.is_some() || next.locate(&id).is_none() => id,
                    _ => make_id(),
                };
                let list = next.list_mut(category);
                let item = CatalogItem {
                    id,
                    name,
                    description,
                    tag,
                    image,
                    sort_index: list.len(),
                };
                list.push(item.clone());
                item
            }
        };
        next.reindex(category);

        self.commit(next)?;
        info!("💾 Saved catalog item {} in {}", item.id, category);
        Ok(item)
    }

    /// Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, LegacyError> {
        let Some((category, idx)) = self.doc.locate(id) else {
            return Ok(false);
        };

        let mut next = self.doc.clone();
        next.list_mut(category).remove(idx);
        next.reindex(category);

        self.commit(next)?;
        info!("🗑️ Deleted catalog item {id} from {category}");
        Ok(true)
    }

    /// Swaps with the neighbour; no-op (and no write) at either end of the list.
    pub fn move_item(
        &mut self,
        category: CategoryKey,
        id: &str,
        direction: Direction,
    ) -> Result<bool, LegacyError> {
        let list = self.doc.list(category);
        let Some(idx) = list.iter().position(|item| item.id == id) else {
            return Ok(false);
        };
        let target = match direction {
            Direction::Up => idx.checked_sub(1),
            Direction::Down => Some(idx + 1).filter(|t| *t < list.len()),
        };
        let Some(target) = target else {
            return Ok(false);
        };

        let mut next = self.doc.clone();
        next.list_mut(category).swap(idx, target);
        next.reindex(category);

        self.commit(next)?;
        Ok(true)
    }

    pub fn reset(&mut self) -> Result<(), LegacyError> {
        self.commit(default_document())?;
        info!("🔄 Catalog reset to the sample document");
        Ok(())
    }

    pub fn export(&self) -> Result<ExportedDocument, LegacyError> {
        self.export_on(Utc::now().date_naive())
    }

    pub fn export_on(&self, date: NaiveDate) -> Result<ExportedDocument, LegacyError> {
        Ok(ExportedDocument {
            file_name: format!("catalog-products-{}.json", date.format("%Y-%m-%d")),
            contents: serde_json::to_string_pretty(&self.doc)?,
        })
    }

    /// Replaces the whole document; on error the current one is kept.
    pub fn import(&mut self, raw: &str) -> Result<usize, LegacyError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| LegacyError::Import(e.to_string()))?;
        if !value.is_object() {
            return Err(LegacyError::Import(
                "expected a JSON object keyed by category".into(),
            ));
        }

        let next = normalize(&value);
        let count = next.len();
        self.commit(next)?;
        info!("📥 Imported {count} catalog items");
        Ok(count)
    }
}
