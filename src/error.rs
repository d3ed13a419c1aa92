//! Client-level error types shared by the token manager and the API client.

// self
use crate::{_prelude::*, http::Method};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Authentication or refresh failed; the in-flight operation cannot continue.
	#[error(transparent)]
	Credentials(#[from] CredentialsError),
	/// A data call returned a non-2xx status.
	#[error(transparent)]
	Http(#[from] HttpError),
	/// A data call failed below HTTP (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// A response body did not match the expected schema.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ClientConfigError),

	/// A request body could not be serialized.
	#[error("Request body could not be serialized.")]
	Encode(#[source] serde_json::Error),
}

/// Failures raised while acquiring or renewing credentials.
///
/// Messages may name the username but never include the password.
#[derive(Debug, ThisError)]
pub enum CredentialsError {
	/// The login call failed at the HTTP or transport level.
	#[error("Login failed for user `{username}`.")]
	Login {
		/// Account that attempted to log in.
		username: String,
		/// Underlying [`HttpError`] or [`TransportError`].
		#[source]
		source: BoxError,
	},
	/// The refresh call could not reach the API.
	#[error("Failed to refresh token.")]
	Refresh {
		/// Underlying transport failure.
		#[source]
		source: BoxError,
	},
	/// The token endpoint answered without an access token.
	#[error("API response did not contain an access token.")]
	MissingAccessToken,
	/// The token endpoint answered with something other than a JSON object.
	#[error("Token endpoint returned an invalid response body.")]
	InvalidTokenResponse {
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
}
impl CredentialsError {
	/// Wraps a login failure for `username`.
	pub fn login(
		username: impl Into<String>,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Login { username: username.into(), source: Box::new(src) }
	}

	/// Wraps a network failure observed while refreshing.
	pub fn refresh(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Refresh { source: Box::new(src) }
	}
}

/// Non-success HTTP status returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Request `{method} {path}` failed with status {status}.")]
pub struct HttpError {
	/// Request method.
	pub method: Method,
	/// Request path (no query string).
	pub path: String,
	/// HTTP status code.
	pub status: u16,
	/// Leading part of the response body, decoded lossily.
	pub body_preview: String,
}
impl HttpError {
	const PREVIEW_LIMIT: usize = 256;

	/// Builds an error from the request line and the raw response body.
	pub fn new(method: Method, url: &Url, status: u16, body: &[u8]) -> Self {
		let body_preview =
			String::from_utf8_lossy(body).chars().take(Self::PREVIEW_LIMIT).collect::<String>();

		Self { method, path: url.path().to_owned(), status, body_preview }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Response bodies that could not be decoded into records.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body was not valid JSON.
	#[error("Response from `{path}` is not valid JSON.")]
	Json {
		/// Request path that produced the body.
		path: String,
		/// Parser failure.
		#[source]
		source: serde_json::Error,
	},
	/// Body was JSON but did not match the record schema.
	#[error("Response from `{path}` does not match the expected schema at `{field}`.")]
	Schema {
		/// Request path that produced the body.
		path: String,
		/// JSON path of the offending field.
		field: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
}
impl DecodeError {
	/// Converts a path-aware serde failure into a schema error.
	pub fn schema(path: impl Into<String>, err: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let field = err.path().to_string();

		Self::Schema { path: path.into(), field, source: err.into_inner() }
	}

	/// Classifies a path-aware serde failure as a syntax or schema problem.
	pub fn classify(
		path: impl Into<String>,
		err: serde_path_to_error::Error<serde_json::Error>,
	) -> Self {
		if err.inner().is_data() {
			Self::schema(path, err)
		} else {
			Self::Json { path: path.into(), source: err.into_inner() }
		}
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ClientConfigError {
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL must use HTTPS outside loopback hosts.
	#[error("The base URL must use HTTPS: {url}.")]
	InsecureBaseUrl {
		/// URL that failed validation.
		url: String,
	},
	/// Base URL carries a query string or fragment.
	#[error("The base URL must not carry a query or fragment: {url}.")]
	BaseUrlHasQuery {
		/// URL that failed validation.
		url: String,
	},
	/// Endpoint URL could not be joined onto the base URL.
	#[error("Endpoint `{endpoint}` cannot be built from the base URL.")]
	InvalidEndpoint {
		/// Endpoint path that failed.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Clock skew must not be negative.
	#[error("Clock skew must not be negative.")]
	NegativeClockSkew,
	/// A duration setting must be positive.
	#[error("The {setting} must be positive.")]
	NonPositiveDuration {
		/// Setting that failed validation.
		setting: &'static str,
	},
	/// Paginated listings need at least one record per page.
	#[error("Page size must be at least 1.")]
	ZeroPageSize,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn http_error_truncates_body_preview() {
		let url = Url::parse("https://example.com/cm/campaigns?page=3")
			.expect("Fixture URL should parse.");
		let body = "x".repeat(1_000);
		let err = HttpError::new(Method::Get, &url, 502, body.as_bytes());

		assert_eq!(err.path, "/cm/campaigns");
		assert_eq!(err.body_preview.len(), 256);
		assert_eq!(err.to_string(), "Request `GET /cm/campaigns` failed with status 502.");
	}

	#[test]
	fn login_error_names_user_and_keeps_source() {
		let url = Url::parse("https://example.com/account/login").expect("Fixture URL should parse.");
		let err: Error =
			CredentialsError::login("alice", HttpError::new(Method::Post, &url, 401, b"")).into();

		assert!(err.to_string().contains("`alice`"));

		let source = StdError::source(&err)
			.expect("Login error should expose the HTTP failure as its source.");

		assert!(source.to_string().contains("401"));
	}
}
