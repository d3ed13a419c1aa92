//! Auth-domain models: account credentials, redacted secrets, and token state.

pub mod credentials;
pub mod secret;
pub mod token;

pub use credentials::*;
pub use secret::*;
pub use token::*;
