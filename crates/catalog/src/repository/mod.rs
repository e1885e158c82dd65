pub mod category;
pub mod command;
pub mod query;

pub use self::category::CategoryQueryRepository;
pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;
