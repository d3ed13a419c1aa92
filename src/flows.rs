//! Token lifecycle orchestration: lazy login, skew-aware refresh, and the re-login fallback.
//!
//! [`TokenManager`] is the only owner of token state. Callers ask for
//! [`TokenManager::bearer_token`] (or [`TokenManager::authorization_header`]) and the manager
//! decides whether to log in, refresh, or reuse the current token. Expiry is computed eagerly when
//! a token arrives and checked lazily on every access; no background timer exists.
//!
//! Refreshes are not coordinated between concurrent callers: each caller that observes a due
//! token performs its own round trip and the last completed update wins. Every update swaps the
//! whole [`TokenState`] under one write lock, so readers never observe a half-written generation.

mod login;
mod refresh;

pub use refresh::{RefreshMetrics, RefreshSnapshot};

// self
use crate::{
	_prelude::*,
	auth::{Credentials, TokenState, TokenStatus},
	config::ClientConfig,
	error::{ClientConfigError, CredentialsError},
	http::ApiHttpClient,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Header name carrying the bearer token.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

#[cfg(feature = "reqwest")]
/// Token manager specialized for the crate's default reqwest transport.
pub type ReqwestTokenManager = TokenManager<ReqwestHttpClient>;

/// Owns the authentication/refresh state machine and produces valid bearer tokens on demand.
pub struct TokenManager<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP client shared with every API call made on behalf of these credentials.
	pub http_client: Arc<C>,
	credentials: Credentials,
	config: ClientConfig,
	state: RwLock<Option<TokenState>>,
	refresh_metrics: RefreshMetrics,
}
impl<C> TokenManager<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a manager that reuses the caller-provided transport.
	pub fn with_http_client(
		credentials: Credentials,
		config: ClientConfig,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			credentials,
			config,
			state: RwLock::new(None),
			refresh_metrics: RefreshMetrics::default(),
		}
	}

	/// Credentials this manager authenticates with.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Account name used for login.
	pub fn username(&self) -> &str {
		self.credentials.username()
	}

	/// API base URL.
	pub fn base_url(&self) -> &Url {
		self.credentials.base_url()
	}

	/// Timing policy applied to tokens and requests.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Counters describing refresh outcomes.
	pub fn refresh_metrics(&self) -> &RefreshMetrics {
		&self.refresh_metrics
	}

	/// Nominal expiry of the current token, if one is held.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		self.state.read().as_ref().map(|state| state.expires_at)
	}

	/// Computes the lifecycle status at `now`.
	pub fn status_at(&self, now: OffsetDateTime) -> TokenStatus {
		match self.state.read().as_ref() {
			Some(state) => state.status_at(now, self.config.clock_skew),
			None => TokenStatus::NoToken,
		}
	}

	/// Computes the lifecycle status using the current UTC instant.
	pub fn status(&self) -> TokenStatus {
		self.status_at(OffsetDateTime::now_utc())
	}

	/// Drops the current token so the next access performs a full login.
	pub fn invalidate(&self) {
		*self.state.write() = None;
	}

	/// Returns a bearer token, logging in or refreshing first when required.
	pub async fn bearer_token(&self) -> Result<String> {
		match self.status() {
			TokenStatus::NoToken => {
				tracing::info!("No token found, authenticating.");

				self.authenticate().await?;
			},
			TokenStatus::ExpiringSoon => {
				tracing::info!("Token is due for refresh, refreshing.");

				self.refresh().await?;
			},
			TokenStatus::Valid => {},
		}

		self.state
			.read()
			.as_ref()
			.map(|state| state.access_token.expose().to_owned())
			.ok_or_else(|| CredentialsError::MissingAccessToken.into())
	}

	/// Returns the `Authorization: Bearer <token>` header pair.
	pub async fn authorization_header(&self) -> Result<(&'static str, String)> {
		let token = self.bearer_token().await?;

		Ok((AUTHORIZATION_HEADER, format!("Bearer {token}")))
	}

	pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ClientConfigError> {
		self.credentials.endpoint(path)
	}

	/// Parses a token response and swaps it in; on failure the previous state is kept.
	fn store_tokens(&self, body: &[u8]) -> Result<(), CredentialsError> {
		let state =
			TokenState::from_body(body, OffsetDateTime::now_utc(), self.config.fallback_ttl)?;

		tracing::debug!(
			expires_at = %state.expires_at,
			expiry_source = ?state.expiry_source,
			has_refresh_token = state.refresh_token.is_some(),
			"Stored new token generation."
		);

		*self.state.write() = Some(state);

		Ok(())
	}

	/// Copies the current access + refresh secrets, if both are held.
	fn refresh_pair(&self) -> Option<(String, String)> {
		self.state.read().as_ref().and_then(|state| {
			state.refresh_token.as_ref().map(|refresh| {
				(state.access_token.expose().to_owned(), refresh.expose().to_owned())
			})
		})
	}
}
#[cfg(feature = "reqwest")]
impl TokenManager<ReqwestHttpClient> {
	/// Creates a manager that provisions its own reqwest-backed transport.
	pub fn new(credentials: Credentials, config: ClientConfig) -> Self {
		Self::with_http_client(credentials, config, ReqwestHttpClient::default())
	}
}
impl<C> Debug for TokenManager<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenManager")
			.field("credentials", &self.credentials)
			.field("config", &self.config)
			.field("state", &*self.state.read())
			.finish()
	}
}
