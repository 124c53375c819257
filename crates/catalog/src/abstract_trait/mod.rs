pub mod auth;
pub mod category;
pub mod customer;
pub mod image;
pub mod product;
pub mod storage;
pub mod storefront;
pub mod upload;
