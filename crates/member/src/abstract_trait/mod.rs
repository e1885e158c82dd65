pub mod level;
pub mod member;
