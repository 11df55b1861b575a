//! Startup configuration.
//!
//! One knob: the listening port. It is read from the environment exactly
//! once, at startup, into a [`Config`] that gets handed to the server;
//! nothing else in the crate touches `std::env`.

use std::net::SocketAddr;

use tracing::warn;

/// Port used when `PORT` is absent from the environment.
pub const DEFAULT_PORT: u16 = 3001;

/// Responder configuration, populated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// `PORT` overrides the listening port when set to a non-empty value.
    /// A value that does not parse as a port is ignored with a warning
    /// rather than taking the process down.
    pub fn from_env() -> Self {
        Self::from_port_var(std::env::var("PORT").ok())
    }

    fn from_port_var(raw: Option<String>) -> Self {
        let port = match raw.as_deref() {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = raw, "ignoring unparsable PORT, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
        };
        Self { port }
    }

    /// The socket address the responder binds: all interfaces, configured port.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_falls_back_to_default() {
        assert_eq!(Config::from_port_var(None).port, 3001);
    }

    #[test]
    fn set_port_overrides_default() {
        assert_eq!(Config::from_port_var(Some("8080".into())).port, 8080);
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        assert_eq!(Config::from_port_var(Some(String::new())).port, 3001);
    }

    #[test]
    fn garbage_port_falls_back_to_default() {
        assert_eq!(Config::from_port_var(Some("not-a-port".into())).port, 3001);
        assert_eq!(Config::from_port_var(Some("99999".into())).port, 3001);
    }

    #[test]
    fn addr_carries_the_configured_port() {
        let config = Config { port: 8080 };
        assert_eq!(config.addr().port(), 8080);
        assert!(config.addr().ip().is_unspecified());
    }
}
