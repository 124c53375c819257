use legacy_catalog::{
    CatalogStore, CategoryKey, DocumentStorage, FileStorage, ItemDraft, LegacyError,
    MemoryStorage,
};
use std::collections::HashSet;

fn draft(name: &str) -> ItemDraft {
    ItemDraft {
        name: name.into(),
        description: "desc".into(),
        ..Default::default()
    }
}

struct ReadOnly(MemoryStorage);

impl DocumentStorage for ReadOnly {
    fn read(&self) -> Result<Option<String>, LegacyError> {
        self.0.read()
    }

    fn write(&self, _contents: &str) -> Result<(), LegacyError> {
        Err(LegacyError::Storage(std::io::Error::other("disk full")))
    }
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let id = {
        let mut store = CatalogStore::open(FileStorage::new(&path)).unwrap();
        assert_eq!(store.document().len(), 12);
        store.import("{}").unwrap();
        store.upsert(CategoryKey::Lingerie, draft("Body")).unwrap().id
    };

    let reopened = CatalogStore::open(FileStorage::new(&path)).unwrap();
    assert_eq!(reopened.document().len(), 1);
    assert_eq!(
        reopened.find(&id).map(|l| l.category),
        Some(CategoryKey::Lingerie)
    );
}

#[test]
fn failed_write_leaves_the_document_unchanged() {
    let mut store = CatalogStore::open(ReadOnly(MemoryStorage::with_contents("{}"))).unwrap();

    let err = store.upsert(CategoryKey::Praia, draft("A")).unwrap_err();
    assert!(matches!(err, LegacyError::Storage(_)));
    assert!(store.document().is_empty());

    assert!(store.reset().is_err());
    assert!(store.document().is_empty());
}

#[test]
fn malformed_saved_document_degrades_safely() {
    let raw = r#"{
        "academia": [{"id": "dup", "nome": "A", "sortIndex": 5}, {"id": "dup", "nome": "B", "sortIndex": 1}],
        "praia": {"not": "a list"},
        "lingerie": [null, true, {"name": "C", "img": "https://cdn.example/c.png"}],
        "unknown": [{"id": "x"}]
    }"#;

    let store = CatalogStore::open(MemoryStorage::with_contents(raw)).unwrap();
    let doc = store.document();

    assert!(doc.praia.is_empty());
    assert!(doc.sexshop.is_empty());
    assert_eq!(doc.lingerie.len(), 1);
    assert_eq!(doc.lingerie[0].image, "https://cdn.example/c.png");

    let names: Vec<&str> = doc.academia.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);

    let ids: HashSet<String> = store.list(None).into_iter().map(|l| l.item.id).collect();
    assert_eq!(ids.len(), 3);

    for key in CategoryKey::ALL {
        for (rank, item) in doc.list(key).iter().enumerate() {
            assert_eq!(item.sort_index, rank);
        }
    }
}
