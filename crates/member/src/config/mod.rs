mod server_config;

pub use self::server_config::ServerConfig;
