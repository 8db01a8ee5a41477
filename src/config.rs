//! Fetch configuration.
//!
//! `FetchConfig` controls the identity and limits applied to every request
//! issued by a [`Fetcher`](crate::net::Fetcher). Defaults come from
//! [`Default`]; [`FetchConfig::builder()`] customizes them with validation.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use vortex_fetch::config::FetchConfig;
//! let cfg = FetchConfig::default();
//! assert_eq!(cfg.user_agent, "Vortex");
//! assert!(cfg.timeout.is_none());
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use std::time::Duration;
//! use vortex_fetch::config::FetchConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = FetchConfig::builder()
//!     .user_agent("Vortex/1.2")
//!     .timeout(Duration::from_secs(30))
//!     .build()?; // returns Result<FetchConfig, FetchConfigError>
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! Builder validation returns [`FetchConfigError`] when the user agent is
//! empty or cannot be sent as a header value, or when the timeout is zero.

use http::HeaderValue;
use std::fmt;
use std::time::Duration;

/// Identifying string sent as `User-Agent` with every request.
pub const DEFAULT_USER_AGENT: &str = "Vortex";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Total time allowed per request. `None` waits until the server ends the response.
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl FetchConfig {
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }
}

/// Builder for [`FetchConfig`].
#[derive(Debug, Clone, Default)]
pub struct FetchConfigBuilder {
    inner: FetchConfig,
}

impl FetchConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut FetchConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = ua.into()) }
    pub fn timeout(self, timeout: Duration) -> Self { self.map(|c| c.timeout = Some(timeout)) }
    pub fn no_timeout(self) -> Self { self.map(|c| c.timeout = None) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut FetchConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<FetchConfig, FetchConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchConfigError {
    EmptyUserAgent,
    InvalidUserAgent(String),
    ZeroTimeout,
}

impl fmt::Display for FetchConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchConfigError::EmptyUserAgent =>
                write!(f, "user_agent must not be empty"),
            FetchConfigError::InvalidUserAgent(ua) =>
                write!(f, "user_agent {ua:?} is not a valid header value"),
            FetchConfigError::ZeroTimeout =>
                write!(f, "timeout must be greater than zero"),
        }
    }
}
impl std::error::Error for FetchConfigError {}

fn validate(c: &FetchConfig) -> Result<(), FetchConfigError> {
    if c.user_agent.trim().is_empty() {
        return Err(FetchConfigError::EmptyUserAgent);
    }
    if HeaderValue::from_str(&c.user_agent).is_err() {
        return Err(FetchConfigError::InvalidUserAgent(c.user_agent.clone()));
    }
    if c.timeout == Some(Duration::ZERO) {
        return Err(FetchConfigError::ZeroTimeout);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_identifies_as_vortex() {
        let cfg = FetchConfig::default();
        assert_eq!(cfg.user_agent, "Vortex");
        assert_eq!(cfg.timeout, None);
        assert_eq!(FetchConfig::builder().build().unwrap(), cfg);
    }

    #[test]
    fn builder_applies_values() {
        let cfg = FetchConfig::builder()
            .user_agent("Vortex/2")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(cfg.user_agent, "Vortex/2");
        assert_eq!(cfg.timeout, Some(Duration::from_secs(5)));

        let cfg = FetchConfig::builder()
            .timeout(Duration::from_secs(5))
            .no_timeout()
            .build()
            .unwrap();
        assert_eq!(cfg.timeout, None);
    }

    #[test]
    fn rejects_bad_user_agents() {
        assert_eq!(
            FetchConfig::builder().user_agent("  ").build(),
            Err(FetchConfigError::EmptyUserAgent)
        );
        assert!(matches!(
            FetchConfig::builder().user_agent("bad\nagent").build(),
            Err(FetchConfigError::InvalidUserAgent(_))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let res = FetchConfig::builder().with(|c| c.timeout = Some(Duration::ZERO)).build();
        assert_eq!(res, Err(FetchConfigError::ZeroTimeout));
    }
}
