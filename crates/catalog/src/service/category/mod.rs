mod command;
mod query;

pub use self::command::{CategoryCommandService, DEFAULT_CATEGORIES};
pub use self::query::CategoryQueryService;
