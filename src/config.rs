// src/config.rs
use crate::errors::{CalcError, Result};

const DEFAULT_PORT: u16 = 3000;

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `PORT` selects the listening port and defaults to 3000 when unset.
    /// A set-but-unparseable `PORT` is a startup error rather than a silent
    /// fallback.
    pub fn from_env() -> Result<Self> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(AppConfig { port })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
            CalcError::Config(format!("PORT must be a valid port number, got '{}'", raw))
        }),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 3000);
    }

    #[test]
    fn test_port_parses_when_set() {
        assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
        assert_eq!(parse_port(Some(" 3001 ")).unwrap(), 3001);
    }

    #[test]
    fn test_invalid_port_is_a_config_error() {
        assert!(matches!(
            parse_port(Some("not-a-port")),
            Err(CalcError::Config(_))
        ));
        assert!(matches!(parse_port(Some("99999")), Err(CalcError::Config(_))));
    }
}
