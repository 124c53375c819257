pub mod api;
pub mod auth;
pub mod category;
pub mod customer;
pub mod image;
pub mod product;
pub mod storefront;
pub mod upload;
