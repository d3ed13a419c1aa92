//! Username/password login against `POST /account/login`.

// self
use crate::{
	_prelude::*,
	error::{CredentialsError, HttpError, TransportError},
	flows::TokenManager,
	http::{ApiHttpClient, ApiRequest, Method},
	obs::{self, FlowKind},
};

const LOGIN_PATH: &str = "/account/login";

#[derive(Serialize)]
struct LoginBody<'a> {
	username: &'a str,
	password: &'a str,
}

impl<C> TokenManager<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Performs a full login and replaces the token state.
	///
	/// Any HTTP or network failure surfaces as [`CredentialsError::Login`] naming the username;
	/// a response without an access token surfaces as [`CredentialsError::MissingAccessToken`]
	/// and leaves the previous state untouched.
	pub async fn authenticate(&self) -> Result<()> {
		obs::observe(FlowKind::Login, "authenticate", self.login()).await
	}

	async fn login(&self) -> Result<()> {
		let username = self.credentials.username();
		let url = self.endpoint(LOGIN_PATH)?;
		let request = ApiRequest::post(url.clone())
			.accept_json()
			.json(&LoginBody { username, password: self.credentials.password().expose() })?
			.timeout(Some(self.config.auth_timeout));
		let response = self.http_client.execute(request).await.map_err(|err| {
			tracing::error!(username, error = %err, "Authentication failed.");

			CredentialsError::login(username, TransportError::network(err))
		})?;

		if !response.is_success() {
			tracing::error!(username, status = response.status, "Authentication failed.");

			return Err(CredentialsError::login(
				username,
				HttpError::new(Method::Post, &url, response.status, &response.body),
			)
			.into());
		}

		self.store_tokens(&response.body)?;

		tracing::info!(username, "Authentication succeeded.");

		Ok(())
	}
}
