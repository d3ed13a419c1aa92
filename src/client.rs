//! Authenticated access to the campaign management endpoints.
//!
//! [`ApiClient`] borrows bearer tokens from a shared [`TokenManager`] before every call and reuses
//! the manager's transport. Each operation issues its calls strictly in sequence; a non-2xx
//! response aborts the whole operation with an [`HttpError`] and no partial result.

mod campaigns;
mod documents;
mod installations;
mod page;

pub use campaigns::ListCampaigns;
pub use documents::extract_filename;
pub use installations::InstallationFilter;

// crates.io
use serde::de::DeserializeOwned;
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	error::{DecodeError, HttpError, TransportError},
	flows::TokenManager,
	http::{ApiHttpClient, ApiRequest, ApiResponse},
};
#[cfg(feature = "reqwest")]
use crate::{auth::Credentials, config::ClientConfig, http::ReqwestHttpClient};

#[cfg(feature = "reqwest")]
/// API client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = ApiClient<ReqwestHttpClient>;

/// Client for the campaign, installation, and document endpoints.
pub struct ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	token_manager: Arc<TokenManager<C>>,
}
impl<C> ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that authenticates through `token_manager`.
	pub fn new(token_manager: impl Into<Arc<TokenManager<C>>>) -> Self {
		Self { token_manager: token_manager.into() }
	}

	/// Token manager backing this client.
	pub fn token_manager(&self) -> &Arc<TokenManager<C>> {
		&self.token_manager
	}

	fn endpoint(&self, path: &str) -> Result<Url> {
		Ok(self.token_manager.endpoint(path)?)
	}

	/// Attaches a fresh bearer token, sends the request, and rejects non-2xx responses.
	async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
		let (name, value) = self.token_manager.authorization_header().await?;
		let method = request.method;
		let url = request.url.clone();
		let request = request
			.header(name, value)
			.timeout(self.token_manager.config().request_timeout);
		let response = self
			.token_manager
			.http_client
			.execute(request)
			.await
			.map_err(TransportError::network)?;

		if !response.is_success() {
			tracing::warn!(
				method = method.as_str(),
				path = url.path(),
				status = response.status,
				"API call returned a non-success status."
			);

			return Err(HttpError::new(method, &url, response.status, &response.body).into());
		}

		Ok(response)
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestHttpClient> {
	/// Builds a reqwest-backed token manager and wraps it.
	pub fn from_credentials(credentials: Credentials, config: ClientConfig) -> Self {
		Self::new(TokenManager::new(credentials, config))
	}
}
impl<C> Clone for ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self { token_manager: self.token_manager.clone() }
	}
}
impl<C> Debug for ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient").field("token_manager", &self.token_manager).finish()
	}
}

/// Decodes a JSON body, reporting the failing field path on schema mismatches.
fn decode_json<T>(url: &Url, body: &[u8]) -> Result<T, DecodeError>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|err| DecodeError::classify(url.path(), err))
}

/// Decodes an already-parsed JSON value.
fn decode_value<T>(url: &Url, value: Value) -> Result<T, DecodeError>
where
	T: DeserializeOwned,
{
	serde_path_to_error::deserialize(value).map_err(|err| DecodeError::classify(url.path(), err))
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::model::InstallationStatusPayload;

	fn url() -> Url {
		Url::parse("https://example.com/cm/campaigns/1/installationprogresssummary")
			.expect("Fixture URL should parse.")
	}

	#[test]
	fn decode_reports_field_path_for_schema_mismatch() {
		let body = br#"{"installed":[{"id":"not-a-number"}]}"#;
		let err = decode_json::<InstallationStatusPayload>(&url(), body)
			.expect_err("Mismatched payload should fail.");

		match err {
			DecodeError::Schema { path, field, .. } => {
				assert_eq!(path, "/cm/campaigns/1/installationprogresssummary");
				assert_eq!(field, "installed[0].id");
			},
			other => panic!("Expected a schema error, got {other:?}."),
		}
	}

	#[test]
	fn decode_reports_syntax_errors_as_json() {
		let err = decode_json::<Value>(&url(), b"{not json")
			.expect_err("Malformed body should fail.");

		assert!(matches!(err, DecodeError::Json { .. }));
	}

	#[test]
	fn decode_value_accepts_parsed_records() {
		let payload: InstallationStatusPayload =
			decode_value(&url(), json!({})).expect("Empty payload should decode.");

		assert_eq!(payload.total_locations(), 0);
	}
}
