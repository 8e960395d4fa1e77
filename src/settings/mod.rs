//! Application settings
//!
//! Configuration types and the layered loader.

pub mod config;
pub mod loader;

pub use self::config::AppConfig;
pub use self::loader::load_config;
