// Server module entry point
// Provides listener creation, the accept loop, and per-connection serving

mod connection;
mod listener;

pub use listener::create_listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::logger;

/// Accept connections forever, spawning one serving task per connection.
///
/// Accept errors are logged and the loop keeps going; once the listener is
/// bound the server only stops with the process.
pub async fn run(listener: TcpListener, config: Arc<Config>) -> std::io::Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::accept_connection(stream, peer_addr, &config);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
