//! Server configuration loaded from the environment

use std::env;

/// Server configuration struct
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub host: String,
    /// Port the HTTP listener binds to
    pub port: u16,
    /// Whether to insert the demo courts into an empty store at startup
    pub seed_demo_data: bool,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `QUADRA_HOST`: bind address (default: "0.0.0.0")
    /// - `QUADRA_PORT`: bind port (default: 3000)
    /// - `QUADRA_SEED_DEMO_DATA`: seed demo courts on startup (default: true)
    pub fn from_env() -> Self {
        let host = env::var("QUADRA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("QUADRA_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(3000);

        let seed_demo_data = env::var("QUADRA_SEED_DEMO_DATA")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(true);

        Self {
            host,
            port,
            seed_demo_data,
        }
    }

    /// Socket address string for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
