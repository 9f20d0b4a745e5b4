use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Udp,

    Tcp,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udp => "UDP",
            Self::Tcp => "TCP",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Nameservers in the order they are tried. `ip` or `ip:port`.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    /// Per-attempt timeout.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub transport: TransportMode,

    #[serde(default = "default_true")]
    pub cache_enabled: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            timeout_ms: default_timeout_ms(),
            transport: TransportMode::Udp,
            cache_enabled: true,
        }
    }
}

impl ResolverConfig {
    pub fn new<S: Into<String>>(servers: impl IntoIterator<Item = S>, timeout_ms: u64) -> Self {
        Self {
            servers: servers.into_iter().map(Into::into).collect(),
            timeout_ms,
            ..Self::default()
        }
    }

    pub fn add_server(&mut self, address: impl Into<String>) {
        self.servers.push(address.into());
    }

    pub fn enable_tcp(&mut self) {
        self.transport = TransportMode::Tcp;
    }

    pub fn disable_cache(&mut self) {
        self.cache_enabled = false;
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn server_addrs(&self) -> Result<Vec<SocketAddr>, DomainError> {
        if self.servers.is_empty() {
            return Err(DomainError::NoServersConfigured);
        }
        self.servers.iter().map(|s| parse_server_addr(s)).collect()
    }
}

/// Parses `ip`, `ip:port` or `[ipv6]:port`; the port defaults to 53.
pub fn parse_server_addr(address: &str) -> Result<SocketAddr, DomainError> {
    let trimmed = address.trim();

    if let Ok(addr) = trimmed.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let bare = trimmed.trim_start_matches('[').trim_end_matches(']');
    bare.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| DomainError::InvalidServerAddress(address.to_string()))
}

fn default_servers() -> Vec<String> {
    vec!["8.8.8.8".to_string(), "1.1.1.1".to_string()]
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}
