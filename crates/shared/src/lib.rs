pub mod abstract_trait;
pub mod cache;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod repository;
pub mod service;
pub mod utils;
