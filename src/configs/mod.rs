mod app_config;

pub use app_config::{ parse_seed, AppConfig };
