//! Account credentials used to log in against the API.

// self
use crate::{
	_prelude::*,
	auth::Secret,
	config::{self, DEFAULT_BASE_URL},
	error::ClientConfigError,
};

/// Immutable username/password pair plus the API base URL they authenticate against.
#[derive(Clone)]
pub struct Credentials {
	username: String,
	password: Secret,
	base_url: Url,
}
impl Credentials {
	/// Creates credentials targeting the production gateway.
	pub fn new(
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Result<Self, ClientConfigError> {
		let base_url = Url::parse(DEFAULT_BASE_URL)
			.map_err(|source| ClientConfigError::InvalidBaseUrl { source })?;

		Ok(Self { username: username.into(), password: Secret::new(password), base_url })
	}

	/// Points the credentials at a different gateway.
	pub fn with_base_url(mut self, base_url: Url) -> Result<Self, ClientConfigError> {
		config::validate_base_url(&base_url)?;

		self.base_url = base_url;

		Ok(self)
	}

	/// Parses and applies a base URL string.
	pub fn with_base_url_str(self, base_url: &str) -> Result<Self, ClientConfigError> {
		let url = Url::parse(base_url)
			.map_err(|source| ClientConfigError::InvalidBaseUrl { source })?;

		self.with_base_url(url)
	}

	/// Account name.
	pub fn username(&self) -> &str {
		&self.username
	}

	/// Account password; never log the returned value.
	pub fn password(&self) -> &Secret {
		&self.password
	}

	/// API base URL (up to, but excluding, the `/account` segment).
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Resolves an endpoint path against the base URL.
	pub fn endpoint(&self, path: &str) -> Result<Url, ClientConfigError> {
		config::endpoint_url(&self.base_url, path)
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &self.password)
			.field("base_url", &self.base_url.as_str())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_to_production_gateway() {
		let credentials =
			Credentials::new("alice", "hunter2").expect("Default credentials should build.");

		assert_eq!(credentials.base_url().as_str(), DEFAULT_BASE_URL);
		assert_eq!(
			credentials.endpoint("/account/login").expect("Endpoint should resolve.").as_str(),
			"https://pos-core.pos-media.eu/gate/api/v1/account/login"
		);
	}

	#[test]
	fn debug_output_hides_password() {
		let credentials =
			Credentials::new("alice", "hunter2").expect("Default credentials should build.");
		let rendered = format!("{credentials:?}");

		assert!(rendered.contains("alice"));
		assert!(!rendered.contains("hunter2"));
	}

	#[test]
	fn base_url_override_is_validated() {
		let err = Credentials::new("alice", "hunter2")
			.and_then(|credentials| credentials.with_base_url_str("http://api.example.com/v1"))
			.expect_err("Plain HTTP should be rejected for remote hosts.");

		assert!(matches!(err, ClientConfigError::InsecureBaseUrl { .. }));

		let err = Credentials::new("alice", "hunter2")
			.and_then(|credentials| credentials.with_base_url_str("not a url"))
			.expect_err("Garbage should be rejected.");

		assert!(matches!(err, ClientConfigError::InvalidBaseUrl { .. }));
	}
}
