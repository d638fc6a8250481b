use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Runtime settings, read from the environment.
///
/// Missing or unparsable variables fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    pub const DEFAULT_PORT: u16 = 8000;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("BANKAPI_HOST")
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::DEFAULT_HOST);
        let port = lookup("BANKAPI_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);

        Self { host, port }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST,
            port: Self::DEFAULT_PORT,
        }
    }
}
