//! Async client for the POS Media Data Core campaign API with self-refreshing credentials and
//! lenient pagination over typed campaign, installation, and document records.
//!
//! The crate is split into two cooperating layers:
//!
//! - [`flows::TokenManager`] owns the login/refresh state machine and hands out bearer tokens on
//!   demand, refreshing lazily once a token enters its clock-skew window.
//! - [`client::ApiClient`] attaches those tokens to every call, walks paginated list endpoints,
//!   and decodes JSON bodies (or binary downloads) into the records under [`model`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod flows;
pub mod http;
pub mod model;
pub mod obs;

pub use client::ApiClient;
pub use flows::TokenManager;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
pub use uuid;
#[cfg(test)] use {color_eyre as _, httpmock as _};
