//! The client-only catalog: one JSON document holding every product, grouped
//! under four fixed categories, persisted as a whole on each mutation.

pub mod category;
pub mod defaults;
pub mod document;
pub mod error;
pub mod ids;
pub mod media;
pub mod normalize;
pub mod storage;
pub mod store;
pub mod storefront;

pub use self::category::CategoryKey;
pub use self::document::{CatalogDocument, CatalogItem};
pub use self::error::LegacyError;
pub use self::storage::{DocumentStorage, FileStorage, MemoryStorage};
pub use self::store::{CatalogStore, Direction, ExportedDocument, ItemDraft, ListedItem};
