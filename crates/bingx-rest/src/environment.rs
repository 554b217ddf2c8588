//! BingX environment configuration.
//!
//! Supports the production and demo (VST paper-trading) environments.

use std::fmt;
use std::str::FromStr;

/// BingX environment (production or demo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BingxEnvironment {
    /// Production environment (real money).
    #[default]
    Production,
    /// Demo environment (VST paper trading).
    Demo,
}

impl BingxEnvironment {
    /// REST API base URL.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://open-api.bingx.com",
            Self::Demo => "https://open-api-vst.bingx.com",
        }
    }

    /// Returns true if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Returns true if this is the demo environment.
    pub fn is_demo(&self) -> bool {
        matches!(self, Self::Demo)
    }

    /// Load environment from `BINGX_ENVIRONMENT` env var.
    ///
    /// Returns `Production` if not set or invalid.
    pub fn from_env() -> Self {
        std::env::var("BINGX_ENVIRONMENT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for BingxEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Demo => write!(f, "demo"),
        }
    }
}

impl FromStr for BingxEnvironment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" | "mainnet" | "main" => Ok(Self::Production),
            "demo" | "vst" | "paper" | "sandbox" => Ok(Self::Demo),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Error parsing environment string.
#[derive(Debug, Clone)]
pub struct ParseEnvironmentError(String);

impl fmt::Display for ParseEnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid environment '{}', expected 'production' or 'demo'",
            self.0
        )
    }
}

impl std::error::Error for ParseEnvironmentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_url() {
        let env = BingxEnvironment::Production;
        assert_eq!(env.rest_base_url(), "https://open-api.bingx.com");
        assert!(env.is_production());
        assert!(!env.is_demo());
    }

    #[test]
    fn test_demo_url() {
        let env = BingxEnvironment::Demo;
        assert_eq!(env.rest_base_url(), "https://open-api-vst.bingx.com");
        assert!(!env.is_production());
        assert!(env.is_demo());
    }

    #[test]
    fn test_parse_production() {
        assert_eq!(
            "production".parse::<BingxEnvironment>().unwrap(),
            BingxEnvironment::Production
        );
        assert_eq!(
            "MAINNET".parse::<BingxEnvironment>().unwrap(),
            BingxEnvironment::Production
        );
    }

    #[test]
    fn test_parse_demo() {
        assert_eq!(
            "demo".parse::<BingxEnvironment>().unwrap(),
            BingxEnvironment::Demo
        );
        assert_eq!(
            "VST".parse::<BingxEnvironment>().unwrap(),
            BingxEnvironment::Demo
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("invalid".parse::<BingxEnvironment>().is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(
            BingxEnvironment::default(),
            BingxEnvironment::Production
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(BingxEnvironment::Production.to_string(), "production");
        assert_eq!(BingxEnvironment::Demo.to_string(), "demo");
    }
}
