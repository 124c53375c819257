pub mod auth;
pub mod category;
pub mod customer;
pub mod filter;
pub mod image;
pub mod lenient;
pub mod product;
pub mod upload;
