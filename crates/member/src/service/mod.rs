pub mod command;
pub mod query;

pub use self::command::MemberCommandService;
pub use self::query::MemberQueryService;
