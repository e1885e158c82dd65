mod hashing;
mod setting;

pub use self::hashing::{DynHashing, HashingTrait};
pub use self::setting::{
    DynSettingQueryRepository, DynSettingService, SettingQueryRepositoryTrait, SettingServiceTrait,
};
