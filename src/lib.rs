//! Exchange Firebase custom tokens for Firebase ID tokens through the Identity Toolkit REST API.
//!
//! The crate ships a typed async [`client::Client`] that performs the single
//! `verifyCustomToken` round-trip, plus (behind the `cli` feature) the argument parsing and
//! logging plumbing for the `firebase-idtoken` binary.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

#[cfg(feature = "cli")] pub mod cli;
pub mod client;
pub mod error;
pub mod http;
pub mod obs;
pub mod token;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		sync::Arc,
		time::Duration as StdDuration,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use tokio_util::sync::CancellationToken;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use tokio_util::sync::CancellationToken;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
