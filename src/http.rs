//! Transport primitives for the `verifyCustomToken` exchange.
//!
//! The module exposes [`TokenHttpClient`] so downstream crates can plug in custom HTTP stacks
//! (mocks, proxies, alternative TLS backends) without touching the client logic. The client asks
//! the transport for a fresh [`TokenHttpClient::Handle`] per call and drops it before returning,
//! so every resource the handle owns is released exactly once on every exit path.

pub use oauth2;

// std
#[cfg(feature = "reqwest")] use std::{ops::Deref, pin::Pin};
// crates.io
use oauth2::{AsyncHttpClient, HttpClientError};
#[cfg(feature = "reqwest")] use oauth2::{HttpRequest, HttpResponse};
// self
#[cfg(feature = "reqwest")] use crate::error::ConfigError;
use crate::{_prelude::*, error::TransportError};

/// Abstraction over HTTP transports capable of executing the token exchange.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can back many
/// clients, and the handles they return must own whatever state is required so their request
/// futures remain `Send` for the lifetime of the in-flight call.
pub trait TokenHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// [`AsyncHttpClient`] handle scoped to a single exchange.
	///
	/// The request future returned by [`AsyncHttpClient::call`] must be `Send` so client futures
	/// can hop executors. The handle must fully read the response body before resolving.
	type Handle: for<'c> AsyncHttpClient<
			'c,
			Error = HttpClientError<Self::TransportError>,
			Future: 'c + Send,
		>
		+ 'static
		+ Send
		+ Sync;

	/// Builds the handle used for one exchange.
	fn exchange_handle(&self) -> Self::Handle;

	/// Converts a transport-specific failure into a client [`Error`].
	///
	/// The default treats every failure as a network error.
	fn map_transport_error(&self, error: Self::TransportError) -> Error {
		TransportError::network(error).into()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The default instance uses reqwest's default client (rustls, connection pooling). Callers
/// that need proxies or custom TLS roots should build their own [`ReqwestClient`] and pass it to
/// [`ReqwestHttpClient::with_client`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl TokenHttpClient for ReqwestHttpClient {
	type Handle = ReqwestHandle;
	type TransportError = ReqwestError;

	fn exchange_handle(&self) -> Self::Handle {
		ReqwestHandle(Arc::new(self.0.clone()))
	}

	fn map_transport_error(&self, error: ReqwestError) -> Error {
		if error.is_builder() {
			return ConfigError::from(error).into();
		}
		if error.is_timeout() {
			return TransportError::TimedOut { timeout: None }.into();
		}

		TransportError::from(error).into()
	}
}

/// Per-exchange handle returned by [`ReqwestHttpClient`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHandle(Arc<ReqwestClient>);
#[cfg(feature = "reqwest")]
impl<'c> AsyncHttpClient<'c> for ReqwestHandle {
	type Error = HttpClientError<ReqwestError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let client = Arc::clone(&self.0);

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			// Reading to the end hands the connection back to the pool.
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
