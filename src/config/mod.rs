// Configuration module entry point
// Reads the single required PORT setting and carries compiled-in defaults

mod types;

use std::net::SocketAddr;

use config::ConfigError;

pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Fatal startup message emitted when the PORT environment variable is missing
pub const MISSING_PORT_ERROR: &str = "no port number provided, server cannot start";

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `PORT` is the only value read from the environment; everything else
    /// is a compiled-in default. A missing `PORT` fails startup before any
    /// socket is opened.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let port = match env.get::<String>("port") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => return Err(ConfigError::Message(MISSING_PORT_ERROR.to_string())),
        };

        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_override("server.port", i64::from(port))?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.default_content_type", "text/plain; charset=utf-8")?
            .set_default("http.server_name", "rust_greeter/0.1")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Parse the PORT environment value into a TCP port number
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse()
        .map_err(|e| ConfigError::Message(format!("invalid port number '{raw}': {e}")))
}
