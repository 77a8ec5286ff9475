//! Server configuration from the environment.

use anyhow::Context;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the server listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from `PORT` and `BIND`, defaulting when
    /// unset. A leading `:` on `PORT` is tolerated (`PORT=:8080`).
    pub fn from_env() -> anyhow::Result<ServerConfig> {
        let port = parse_port(env::var("PORT").ok())?;
        let bind = parse_bind(env::var("BIND").ok())?;
        Ok(ServerConfig { bind, port })
    }

    /// The socket address to bind the listener to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn parse_port(value: Option<String>) -> anyhow::Result<u16> {
    match value {
        Some(raw) => {
            let trimmed = raw.trim_start_matches(':');
            trimmed
                .parse::<u16>()
                .with_context(|| format!("PORT '{}' is not a valid port number", raw))
        }
        None => Ok(DEFAULT_PORT),
    }
}

fn parse_bind(value: Option<String>) -> anyhow::Result<IpAddr> {
    match value {
        Some(raw) => raw
            .parse::<IpAddr>()
            .with_context(|| format!("BIND '{}' is not a valid IP address", raw)),
        None => Ok(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn port_parses_plain_and_colon_prefixed_values() {
        assert_eq!(parse_port(Some("9090".to_string())).unwrap(), 9090);
        assert_eq!(parse_port(Some(":9090".to_string())).unwrap(), 9090);
    }

    #[test]
    fn port_rejects_garbage() {
        assert!(parse_port(Some("not-a-port".to_string())).is_err());
        assert!(parse_port(Some("99999".to_string())).is_err());
    }

    #[test]
    fn bind_defaults_to_unspecified() {
        assert_eq!(
            parse_bind(None).unwrap(),
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        );
        assert_eq!(
            parse_bind(Some("127.0.0.1".to_string())).unwrap(),
            "127.0.0.1".parse::<IpAddr>().unwrap()
        );
        assert!(parse_bind(Some("nowhere".to_string())).is_err());
    }

    #[test]
    fn addr_combines_bind_and_port() {
        let config = ServerConfig::default();
        assert_eq!(config.addr().port(), DEFAULT_PORT);
    }
}
