mod setting;

pub use self::setting::SettingService;
