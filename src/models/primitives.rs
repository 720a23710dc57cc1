//! Primitive types shared across the client.

use std::fmt;

/// Environment configuration for the Lithic API.
///
/// Determines which API host requests go to.
///
/// # Example
///
/// ```
/// use lithic::Environment;
///
/// let env = Environment::Sandbox;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment, live cards and real money.
    #[default]
    Production,
    /// Sandbox environment for integration testing.
    Sandbox,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.lithic.com",
            Environment::Sandbox => "https://sandbox.lithic.com",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Production.api_base_url(),
            "https://api.lithic.com"
        );
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://sandbox.lithic.com"
        );
    }

    #[test]
    fn test_environment_default_is_production() {
        let env = Environment::default();
        assert!(env.is_production());
        assert!(!env.is_sandbox());
        assert_eq!(env.to_string(), "production");
    }
}
