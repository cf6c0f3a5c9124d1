pub mod config;
pub mod logging;
pub mod server;
pub mod shutdown;

pub use config::AppConfig;
pub use server::Server;
