use crate::category::CategoryKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "desc")]
    pub description: String,
    pub tag: String,
    #[serde(alias = "img")]
    pub image: String,
    /// Dense 0-based rank inside the item's category.
    pub sort_index: usize,
}

/// The whole catalog, one list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub academia: Vec<CatalogItem>,
    #[serde(default)]
    pub praia: Vec<CatalogItem>,
    #[serde(default)]
    pub lingerie: Vec<CatalogItem>,
    #[serde(default)]
    pub sexshop: Vec<CatalogItem>,
}

impl CatalogDocument {
    pub fn list(&self, key: CategoryKey) -> &[CatalogItem] {
        match key {
            CategoryKey::Academia => &self.academia,
            CategoryKey::Praia => &self.praia,
            CategoryKey::Lingerie => &self.lingerie,
            CategoryKey::SexShop => &self.sexshop,
        }
    }

    pub fn list_mut(&mut self, key: CategoryKey) -> &mut Vec<CatalogItem> {
        match key {
            CategoryKey::Academia => &mut self.academia,
            CategoryKey::Praia => &mut self.praia,
            CategoryKey::Lingerie => &mut self.lingerie,
            CategoryKey::SexShop => &mut self.sexshop,
        }
    }

    /// Category holding `id`, if any.
    pub fn locate(&self, id: &str) -> Option<(CategoryKey, usize)> {
        CategoryKey::ALL.into_iter().find_map(|key| {
            self.list(key)
                .iter()
                .position(|item| item.id == id)
                .map(|idx| (key, idx))
        })
    }

    pub fn len(&self) -> usize {
        CategoryKey::ALL.iter().map(|key| self.list(*key).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-derives `sort_index` from list position.
    pub fn reindex(&mut self, key: CategoryKey) {
        for (rank, item) in self.list_mut(key).iter_mut().enumerate() {
            item.sort_index = rank;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, sort_index: usize) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            tag: "Selected".into(),
            image: String::new(),
            sort_index,
        }
    }

    #[test]
    fn reindex_makes_ranks_dense() {
        let mut doc = CatalogDocument::default();
        doc.praia = vec![item("a", 7), item("b", 3)];
        doc.reindex(CategoryKey::Praia);

        let ranks: Vec<usize> = doc.praia.iter().map(|i| i.sort_index).collect();
        assert_eq!(ranks, vec![0, 1]);
    }

    #[test]
    fn serializes_with_fixed_keys() {
        let mut doc = CatalogDocument::default();
        doc.sexshop.push(item("x", 0));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["sexshop"][0]["sortIndex"], 0);
        assert_eq!(json["academia"], serde_json::json!([]));
        assert_eq!(doc.locate("x"), Some((CategoryKey::SexShop, 0)));
    }
}
