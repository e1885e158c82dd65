pub mod level;
pub mod member;
pub mod score_log;
