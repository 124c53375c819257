pub mod auth;
pub mod category;
pub mod customer;
pub mod image;
pub mod product;
pub mod storefront;
pub mod upload;

use shared::errors::{RepositoryError, ServiceError};

/// Formats a repository failure for the tracer and lifts it into a service error.
pub(crate) fn repo_failure(context: &str, err: RepositoryError) -> (String, ServiceError) {
    (format!("{context}: {err:?}"), ServiceError::Repo(err))
}
