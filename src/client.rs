//! Identity Toolkit client owning the API key, endpoint configuration, and transport.

pub mod config;

mod verify;

pub use config::*;

// self
use crate::{_prelude::*, http::TokenHttpClient, token::Secret};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestTokenClient = Client<ReqwestHttpClient>;

/// Exchanges Firebase custom tokens for ID tokens.
///
/// The client is immutable once built and holds no per-call state, so a single instance can be
/// shared (e.g. behind an `Arc`) by concurrent callers; the transport is the only shared
/// resource.
#[derive(Clone)]
pub struct Client<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	/// API key, endpoint, and timeout settings.
	pub config: ClientConfig,
}
impl<C> Client<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), config }
	}

	/// API key attached to every request.
	pub fn api_key(&self) -> &Secret {
		self.config.api_key()
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client for `api_key` with the default endpoint and reqwest transport.
	///
	/// Construction never fails; the key is not validated locally.
	pub fn new(api_key: impl Into<Secret>) -> Self {
		Self::from_config(ClientConfig::new(api_key))
	}

	/// Creates a client from an explicit configuration with the default reqwest transport.
	pub fn from_config(config: ClientConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client").field("config", &self.config).finish()
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	#[test]
	fn new_client_uses_default_endpoint_and_redacts_key() {
		let client = Client::new("AIzaTestKey");

		assert_eq!(client.api_key().expose(), "AIzaTestKey");
		assert_eq!(client.config.endpoint().as_str(), VERIFY_CUSTOM_TOKEN_ENDPOINT);
		assert_eq!(client.config.timeout(), None);

		let rendered = format!("{client:?}");

		assert!(!rendered.contains("AIzaTestKey"), "{rendered}");
	}
}
