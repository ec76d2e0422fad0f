pub mod config;
pub mod launch;
pub mod logger;
