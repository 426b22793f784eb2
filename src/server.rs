//! Listener bootstrap.

use std::io;
use tokio::net::TcpListener;

/// Extra ports tried after the configured one is found occupied.
pub const PORT_RETRIES: u16 = 10;

/// Bind `0.0.0.0:port`, walking to the next port on "address in use" for up
/// to `retries` additional attempts. Any other bind error is returned
/// immediately. The only retry in the system.
pub async fn bind_with_retry(port: u16, retries: u16) -> io::Result<TcpListener> {
    let mut port = port;
    let mut left = retries;
    loop {
        match TcpListener::bind(("0.0.0.0", port)).await {
            Ok(listener) => return Ok(listener),
            Err(e) if e.kind() == io::ErrorKind::AddrInUse && left > 0 => {
                tracing::warn!(port, next = port + 1, "port in use, trying next");
                port += 1;
                left -= 1;
            }
            Err(e) => return Err(e),
        }
    }
}
