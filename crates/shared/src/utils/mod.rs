mod format;
mod gracefullshutdown;
mod logs;
mod token;

pub use self::format::{ceil_two_price, fix_str_length, image_tag, image_url};
pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::token::random_token;
