mod database;
mod hashing;
mod myconfig;
mod redis;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::hashing::Hashing;
pub use self::myconfig::{Config, ServiceConfig};
pub use self::redis::{RedisClient, RedisConfig};
