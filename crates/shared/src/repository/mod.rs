mod setting;

pub use self::setting::SettingQueryRepository;
