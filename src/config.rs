//! Client tuning knobs and base-URL validation.
//!
//! [`ClientConfig`] carries the timing policy shared by the token manager and the API client;
//! [`ClientConfigBuilder`] validates it. Base URLs are owned by
//! [`Credentials`](crate::auth::Credentials) and validated through [`validate_base_url`].

// self
use crate::{_prelude::*, error::ClientConfigError};

/// Production gateway of the POS Media Data Core API.
pub const DEFAULT_BASE_URL: &str = "https://pos-core.pos-media.eu/gate/api/v1";

/// Validated timing policy for token handling and API calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Safety margin subtracted from a token's expiry to force early refresh.
	pub clock_skew: Duration,
	/// Lifetime assumed when a token response carries no usable expiry.
	pub fallback_ttl: Duration,
	/// Timeout applied to login and refresh calls.
	pub auth_timeout: Duration,
	/// Timeout applied to data calls; `None` defers to the transport default.
	pub request_timeout: Option<Duration>,
}
impl ClientConfig {
	/// Default clock skew (30 seconds).
	pub const DEFAULT_CLOCK_SKEW: Duration = Duration::seconds(30);
	/// Default fallback token lifetime (3000 seconds).
	pub const DEFAULT_FALLBACK_TTL: Duration = Duration::seconds(3_000);
	/// Default login/refresh timeout (15 seconds).
	pub const DEFAULT_AUTH_TIMEOUT: Duration = Duration::seconds(15);

	/// Creates a new builder seeded with the defaults.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	fn validate(&self) -> Result<(), ClientConfigError> {
		if self.clock_skew.is_negative() {
			return Err(ClientConfigError::NegativeClockSkew);
		}

		ensure_positive("fallback token TTL", self.fallback_ttl)?;
		ensure_positive("authentication timeout", self.auth_timeout)?;

		if let Some(timeout) = self.request_timeout {
			ensure_positive("request timeout", timeout)?;
		}

		Ok(())
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			clock_skew: Self::DEFAULT_CLOCK_SKEW,
			fallback_ttl: Self::DEFAULT_FALLBACK_TTL,
			auth_timeout: Self::DEFAULT_AUTH_TIMEOUT,
			request_timeout: None,
		}
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
	config: ClientConfig,
}
impl ClientConfigBuilder {
	/// Overrides the refresh clock skew.
	pub fn clock_skew(mut self, skew: Duration) -> Self {
		self.config.clock_skew = skew;

		self
	}

	/// Overrides the fallback token lifetime.
	pub fn fallback_ttl(mut self, ttl: Duration) -> Self {
		self.config.fallback_ttl = ttl;

		self
	}

	/// Overrides the login/refresh timeout.
	pub fn auth_timeout(mut self, timeout: Duration) -> Self {
		self.config.auth_timeout = timeout;

		self
	}

	/// Applies an explicit timeout to data calls.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.config.request_timeout = Some(timeout);

		self
	}

	/// Consumes the builder and validates the resulting config.
	pub fn build(self) -> Result<ClientConfig, ClientConfigError> {
		self.config.validate()?;

		Ok(self.config)
	}
}

/// Checks that `url` is usable as an API base URL.
///
/// HTTPS is required except for loopback hosts, which keeps local mock servers usable.
pub fn validate_base_url(url: &Url) -> Result<(), ClientConfigError> {
	if url.query().is_some() || url.fragment().is_some() {
		return Err(ClientConfigError::BaseUrlHasQuery { url: url.to_string() });
	}

	match url.scheme() {
		"https" => Ok(()),
		"http" if is_loopback(url) => Ok(()),
		_ => Err(ClientConfigError::InsecureBaseUrl { url: url.to_string() }),
	}
}

/// Appends `endpoint` (e.g. `/cm/campaigns`) to the base URL path.
pub fn endpoint_url(base: &Url, endpoint: &str) -> Result<Url, ClientConfigError> {
	let joined = format!(
		"{}/{}",
		base.as_str().trim_end_matches('/'),
		endpoint.trim_start_matches('/')
	);

	Url::parse(&joined).map_err(|source| ClientConfigError::InvalidEndpoint {
		endpoint: endpoint.to_owned(),
		source,
	})
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(url::Host::Ipv4(addr)) => addr.is_loopback(),
		Some(url::Host::Ipv6(addr)) => addr.is_loopback(),
		None => false,
	}
}

fn ensure_positive(setting: &'static str, value: Duration) -> Result<(), ClientConfigError> {
	if value.is_positive() { Ok(()) } else { Err(ClientConfigError::NonPositiveDuration { setting }) }
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Fixture URL should parse.")
	}

	#[test]
	fn builder_defaults_match_documented_policy() {
		let config = ClientConfig::builder().build().expect("Default config should validate.");

		assert_eq!(config.clock_skew, Duration::seconds(30));
		assert_eq!(config.fallback_ttl, Duration::seconds(3_000));
		assert_eq!(config.auth_timeout, Duration::seconds(15));
		assert!(config.request_timeout.is_none());
	}

	#[test]
	fn builder_rejects_invalid_durations() {
		let err = ClientConfig::builder()
			.clock_skew(Duration::seconds(-1))
			.build()
			.expect_err("Negative skew should be rejected.");

		assert_eq!(err, ClientConfigError::NegativeClockSkew);

		let err = ClientConfig::builder()
			.fallback_ttl(Duration::ZERO)
			.build()
			.expect_err("Zero TTL should be rejected.");

		assert!(matches!(err, ClientConfigError::NonPositiveDuration { .. }));

		let err = ClientConfig::builder()
			.request_timeout(Duration::seconds(-5))
			.build()
			.expect_err("Negative request timeout should be rejected.");

		assert_eq!(err, ClientConfigError::NonPositiveDuration { setting: "request timeout" });
	}

	#[test]
	fn base_url_requires_https_outside_loopback() {
		assert!(validate_base_url(&url(DEFAULT_BASE_URL)).is_ok());
		assert!(validate_base_url(&url("http://127.0.0.1:8080/api")).is_ok());
		assert!(validate_base_url(&url("http://localhost/api")).is_ok());
		assert!(matches!(
			validate_base_url(&url("http://example.com/api")),
			Err(ClientConfigError::InsecureBaseUrl { .. })
		));
		assert!(matches!(
			validate_base_url(&url("https://example.com/api?x=1")),
			Err(ClientConfigError::BaseUrlHasQuery { .. })
		));
	}

	#[test]
	fn endpoint_url_ignores_trailing_slashes() {
		let with_slash = endpoint_url(&url("https://example.com/gate/api/v1/"), "/account/login")
			.expect("Endpoint should join.");
		let without = endpoint_url(&url("https://example.com/gate/api/v1"), "account/login")
			.expect("Endpoint should join.");

		assert_eq!(with_slash.as_str(), "https://example.com/gate/api/v1/account/login");
		assert_eq!(with_slash, without);
	}
}
