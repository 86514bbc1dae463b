pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;

pub use config::{AppConfig, LoggingConfig, ServerConfig, StorageSettings};
pub use observability::init_tracing;
pub use server::{BistroServer, ServerBuilder, build_app};
