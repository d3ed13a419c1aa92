//! Refresh-token exchange against `POST /account/refreshtoken`.
//!
//! The exchange sends the expiring access token as a bearer header and the refresh token in a
//! `RefreshToken` header. Two paths fall back to a full login instead of failing: holding no
//! refresh token at all, and a refresh answered with status >= 400 (treated as a revoked refresh
//! token). Network failures are not retried and surface as [`CredentialsError::Refresh`].

mod stats;

pub use stats::{RefreshMetrics, RefreshSnapshot};

// self
use crate::{
	_prelude::*,
	error::CredentialsError,
	flows::{AUTHORIZATION_HEADER, TokenManager, refresh::stats::RefreshOutcome},
	http::{ApiHttpClient, ApiRequest},
	obs::{self, FlowKind},
};

const REFRESH_PATH: &str = "/account/refreshtoken";
const REFRESH_TOKEN_HEADER: &str = "RefreshToken";

#[derive(Serialize)]
struct EmptyBody {}

impl<C> TokenManager<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Renews the token state, falling back to [`TokenManager::authenticate`] when the refresh
	/// token is missing or rejected.
	pub async fn refresh(&self) -> Result<()> {
		let Some((access_token, refresh_token)) = self.refresh_pair() else {
			tracing::debug!("Missing tokens for refresh, performing full login.");

			return self.relogin().await;
		};

		let exchange = self.exchange_refresh_token(access_token, refresh_token);

		obs::observe(FlowKind::Refresh, "refresh", exchange).await
	}

	async fn exchange_refresh_token(
		&self,
		access_token: String,
		refresh_token: String,
	) -> Result<()> {
		self.refresh_metrics.record_attempt();

		let request = ApiRequest::post(self.endpoint(REFRESH_PATH)?)
			.accept_json()
			.json(&EmptyBody {})?
			.header(AUTHORIZATION_HEADER, format!("Bearer {access_token}"))
			.header(REFRESH_TOKEN_HEADER, refresh_token)
			.timeout(Some(self.config.auth_timeout));
		let response = match self.http_client.execute(request).await {
			Ok(response) => response,
			Err(err) => {
				tracing::error!(error = %err, "Network error during token refresh.");

				self.refresh_metrics.record(RefreshOutcome::Failed);

				return Err(CredentialsError::refresh(err).into());
			},
		};

		if response.status >= 400 {
			tracing::warn!(status = response.status, "Token refresh rejected, re-authenticating.");

			return self.relogin().await;
		}

		self.store_tokens(&response.body).inspect_err(|_| {
			self.refresh_metrics.record(RefreshOutcome::Failed);
		})?;
		self.refresh_metrics.record(RefreshOutcome::Exchanged);

		Ok(())
	}

	// Counts a relogin only once the login went through.
	async fn relogin(&self) -> Result<()> {
		let result = self.authenticate().await;

		self.refresh_metrics.record(match result {
			Ok(()) => RefreshOutcome::Relogin,
			Err(_) => RefreshOutcome::Failed,
		});

		result
	}
}
