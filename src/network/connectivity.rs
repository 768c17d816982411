use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Reports whether the network is currently reachable (allows mocking in tests)
pub trait ConnectivityProbe {
    /// Queried fresh on every call; implementations must not cache
    fn is_connected(&self) -> bool;
}

/// Reachability probe that opens a TCP connection to the results host
pub struct TcpConnectivityProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpConnectivityProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self { host: host.into(), port, timeout }
    }

    /// Probe the host and port the results are served from
    pub fn for_url(url: &Url, timeout: Duration) -> Result<Self> {
        let host = url.host_str().with_context(|| format!("URL has no host: {}", url))?;
        let port = url
            .port_or_known_default()
            .with_context(|| format!("URL has no known port: {}", url))?;
        Ok(Self::new(host, port, timeout))
    }

    fn resolve(&self) -> Vec<SocketAddr> {
        match (self.host.as_str(), self.port).to_socket_addrs() {
            Ok(addrs) => addrs.collect(),
            Err(e) => {
                log::debug!("[NET] failed to resolve {}:{}: {}", self.host, self.port, e);
                Vec::new()
            }
        }
    }
}

impl ConnectivityProbe for TcpConnectivityProbe {
    fn is_connected(&self) -> bool {
        let connected = self.resolve().iter().any(|addr| {
            match TcpStream::connect_timeout(addr, self.timeout) {
                Ok(_) => true,
                Err(e) => {
                    log::debug!("[NET] connect to {} failed: {}", addr, e);
                    false
                }
            }
        });

        if !connected {
            log::info!("[NET] {}:{} unreachable, treating as offline", self.host, self.port);
        }
        connected
    }
}
