mod command;
mod query;

pub use self::command::{
    DynMemberCommandRepository, MemberChanges, MemberCommandRepositoryTrait, NewMember,
};
pub use self::query::{DynMemberQueryRepository, MemberQueryRepositoryTrait};
