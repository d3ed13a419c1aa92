//! Token state held by the token manager and the rules that derive it from API responses.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, auth::Secret, error::CredentialsError, model::timestamp};

const ACCESS_TOKEN_KEYS: [&str; 2] = ["accessToken", "access_token"];
const REFRESH_TOKEN_KEYS: [&str; 2] = ["refreshToken", "refresh_token"];
const EXPIRES_IN_KEYS: [&str; 2] = ["expires_in", "expiresIn"];
const EXPIRES_AT_KEYS: [&str; 2] = ["expires_at", "expiresAt"];

/// Lifecycle status of the token manager's current token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenStatus {
	/// No token has been obtained yet (or it was invalidated).
	NoToken,
	/// Token is usable as-is.
	Valid,
	/// Token is inside the clock-skew window or already expired; refresh before use.
	ExpiringSoon,
}

/// Where a token's expiry instant came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpirySource {
	/// Relative `expires_in` duration.
	ExpiresIn,
	/// Absolute `expires_at` timestamp.
	ExpiresAt,
	/// Neither field was usable; the configured fallback TTL applied.
	Fallback,
}

/// One generation of tokens issued by the API.
#[derive(Clone)]
pub struct TokenState {
	/// Access token secret; callers must avoid logging it.
	pub access_token: Secret,
	/// Refresh token secret, if the API issued one.
	pub refresh_token: Option<Secret>,
	/// Nominal expiry instant.
	pub expires_at: OffsetDateTime,
	/// How [`TokenState::expires_at`] was derived.
	pub expiry_source: ExpirySource,
}
impl TokenState {
	/// Builds state from a decoded token response.
	///
	/// Expiry priority: `expires_in`/`expiresIn` seconds, then an `expires_at`/`expiresAt`
	/// timestamp, then `now + fallback_ttl`. An unparseable timestamp is logged and falls through
	/// to the fallback rather than failing.
	pub fn from_payload(
		payload: &Map<String, Value>,
		now: OffsetDateTime,
		fallback_ttl: Duration,
	) -> Result<Self, CredentialsError> {
		let access_token =
			first_string(payload, &ACCESS_TOKEN_KEYS).ok_or(CredentialsError::MissingAccessToken)?;
		let refresh_token = first_string(payload, &REFRESH_TOKEN_KEYS).map(Secret::new);
		let (expires_at, expiry_source) = match extract_expiry(payload, now) {
			Some(found) => found,
			None => (now.saturating_add(fallback_ttl), ExpirySource::Fallback),
		};

		Ok(Self { access_token: Secret::new(access_token), refresh_token, expires_at, expiry_source })
	}

	/// Decodes a raw token response body and builds state from it.
	pub fn from_body(
		body: &[u8],
		now: OffsetDateTime,
		fallback_ttl: Duration,
	) -> Result<Self, CredentialsError> {
		let payload = serde_json::from_slice::<Map<String, Value>>(body)
			.map_err(|source| CredentialsError::InvalidTokenResponse { source })?;

		Self::from_payload(&payload, now, fallback_ttl)
	}

	/// Returns `true` once `now` is inside the skew window before expiry.
	///
	/// A skew reaching past the representable range makes the token due at once.
	pub fn is_due_at(&self, now: OffsetDateTime, clock_skew: Duration) -> bool {
		self.expires_at.checked_sub(clock_skew).is_none_or(|due| now >= due)
	}

	/// Computes the lifecycle status at `now`.
	pub fn status_at(&self, now: OffsetDateTime, clock_skew: Duration) -> TokenStatus {
		if self.is_due_at(now, clock_skew) { TokenStatus::ExpiringSoon } else { TokenStatus::Valid }
	}
}
impl Debug for TokenState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenState")
			.field("access_token", &"<redacted>")
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.field("expires_at", &self.expires_at)
			.field("expiry_source", &self.expiry_source)
			.finish()
	}
}

/// Finds the expiry instant advertised by a token response, if any.
pub fn extract_expiry(
	payload: &Map<String, Value>,
	now: OffsetDateTime,
) -> Option<(OffsetDateTime, ExpirySource)> {
	if let Some(instant) = EXPIRES_IN_KEYS
		.iter()
		.filter_map(|key| payload.get(*key).and_then(Value::as_f64))
		.find(|secs| *secs > 0.)
		.and_then(|secs| std::time::Duration::try_from_secs_f64(secs).ok())
		.and_then(|std| Duration::try_from(std).ok())
		.and_then(|delta| now.checked_add(delta))
	{
		return Some((instant, ExpirySource::ExpiresIn));
	}

	let raw = first_value(payload, &EXPIRES_AT_KEYS)?;

	match timestamp::parse_timestamp(raw) {
		Some(instant) => Some((instant, ExpirySource::ExpiresAt)),
		None => {
			tracing::warn!(expires_at = raw, "Failed to parse token expiry timestamp.");

			None
		},
	}
}

fn first_value<'a>(payload: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
	keys.iter().filter_map(|key| payload.get(*key).and_then(Value::as_str)).find(|v| !v.is_empty())
}

fn first_string(payload: &Map<String, Value>, keys: &[&str]) -> Option<String> {
	first_value(payload, keys).map(str::to_owned)
}
