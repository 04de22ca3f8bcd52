// Frameworks layer: runtime configuration and HTTP server bootstrap.

pub mod config;
pub mod server;
