pub mod admin_user;
pub mod category;
pub mod customer;
pub mod product;
pub mod product_image;
pub mod status;
