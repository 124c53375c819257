mod command;
mod query;

pub use self::command::CustomerCommandService;
pub use self::query::CustomerQueryService;
