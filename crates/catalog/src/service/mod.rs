pub mod category;
pub mod command;
pub mod query;

pub use self::category::CategoryQueryService;
pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;
