//! Listen address for the Greeter Server

use std::net::SocketAddr;

/// Port the listener binds. Fixed in source; no environment variable or
/// CLI flag overrides it.
pub const PORT: u16 = 8080;

/// Server-specific configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // All interfaces, so the service is reachable from outside the
            // container the pipeline deploys it into.
            host: "0.0.0.0".to_string(),
            port: PORT,
        }
    }
}

impl ServerConfig {
    /// Get the socket address for the server
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}
