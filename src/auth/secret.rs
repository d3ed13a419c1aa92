//! Redacting holder for passwords and tokens.

// self
use crate::_prelude::*;

/// Sensitive string such as a password, access token, or refresh token.
///
/// Formatting never prints the value and [`Secret::expose`] is the only accessor. Clones share
/// one allocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Arc<str>);
impl Secret {
	/// Wraps a value.
	pub fn new(value: impl Into<String>) -> Self {
		Self(Arc::from(value.into()))
	}

	/// Reads the raw value; never log it.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` for an empty value.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<String> for Secret {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}
impl From<&str> for Secret {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("Secret(<redacted>)")
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
