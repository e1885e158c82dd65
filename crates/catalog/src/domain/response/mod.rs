pub mod api;
pub mod category;
pub mod pagination;
pub mod product;
