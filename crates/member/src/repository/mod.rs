pub mod command;
pub mod level;
pub mod query;

pub use self::command::MemberCommandRepository;
pub use self::level::LevelQueryRepository;
pub use self::query::MemberQueryRepository;
