//! `verifyCustomToken` exchange: one JSON POST, one decode, one error-mapping path.
//!
//! [`Client::verify_custom_token_with_cancel`] races the exchange against a
//! [`CancellationToken`] (and the optional configured timeout), so an interrupted caller gets
//! [`TransportError::Cancelled`] back promptly instead of waiting on the network. The transport
//! handle is scoped to the exchange and dropped before decoding starts.

// crates.io
use oauth2::{
	AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse,
	http::{
		Method, Request, StatusCode,
		header::{ACCEPT, CONTENT_TYPE, HeaderValue},
	},
};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	client::Client,
	error::{BodyKind, ConfigError, TransportError},
	http::TokenHttpClient,
	obs::{self, Operation, RequestOutcome, RequestSpan},
	token::{ErrorEnvelope, VerifyCustomTokenRequest, VerifyCustomTokenResponse},
};

const CONTENT_TYPE_JSON: &str = "application/json";

impl<C> Client<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Exchanges a custom token for an ID token.
	///
	/// Dropping the returned future abandons the in-flight request; use
	/// [`Client::verify_custom_token_with_cancel`] to cancel from elsewhere.
	pub async fn verify_custom_token(
		&self,
		request: &VerifyCustomTokenRequest,
	) -> Result<VerifyCustomTokenResponse> {
		self.verify_custom_token_with_cancel(request, &CancellationToken::new()).await
	}

	/// Exchanges a custom token for an ID token, aborting as soon as `cancel` fires.
	///
	/// Exactly one request is sent unless `cancel` is already cancelled, in which case none is.
	pub async fn verify_custom_token_with_cancel(
		&self,
		request: &VerifyCustomTokenRequest,
		cancel: &CancellationToken,
	) -> Result<VerifyCustomTokenResponse> {
		const OPERATION: Operation = Operation::VerifyCustomToken;

		let span = RequestSpan::new(OPERATION);

		obs::record_request_outcome(OPERATION, RequestOutcome::Attempt);

		let result = span
			.instrument(async move {
				if cancel.is_cancelled() {
					return Err(Error::from(TransportError::Cancelled));
				}

				tokio::select! {
					biased;
					_ = cancel.cancelled() => Err(Error::from(TransportError::Cancelled)),
					result = self.bounded_exchange(request) => result,
				}
			})
			.await;

		let outcome = RequestOutcome::of(&result);

		span.record_outcome(outcome);
		obs::record_request_outcome(OPERATION, outcome);

		result
	}

	async fn bounded_exchange(
		&self,
		request: &VerifyCustomTokenRequest,
	) -> Result<VerifyCustomTokenResponse> {
		match self.config.timeout() {
			Some(timeout) => tokio::time::timeout(timeout, self.exchange(request))
				.await
				.map_err(|_| TransportError::TimedOut { timeout: Some(timeout) })?,
			None => self.exchange(request).await,
		}
	}

	async fn exchange(
		&self,
		request: &VerifyCustomTokenRequest,
	) -> Result<VerifyCustomTokenResponse> {
		let body = serde_json::to_vec(request).map_err(ConfigError::RequestEncode)?;
		let http_request = build_json_post(&self.config.request_url(), body)?;
		let handle = self.http_client.exchange_handle();
		let response = handle
			.call(http_request)
			.await
			.map_err(|e| map_http_client_error(self.http_client.as_ref(), e));

		drop(handle);

		decode_response(response?)
	}
}

fn build_json_post(url: &Url, body: Vec<u8>) -> Result<HttpRequest> {
	let json = HeaderValue::from_static(CONTENT_TYPE_JSON);

	Request::builder()
		.method(Method::POST)
		.uri(url.as_str())
		.header(CONTENT_TYPE, json.clone())
		.header(ACCEPT, json)
		.body(body)
		.map_err(|e| ConfigError::from(e).into())
}

fn map_http_client_error<C>(client: &C, err: HttpClientError<C::TransportError>) -> Error
where
	C: ?Sized + TokenHttpClient,
{
	match err {
		HttpClientError::Reqwest(inner) => client.map_transport_error(*inner),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		_ => TransportError::Other { message: "unrecognized HTTP client failure".into() }.into(),
	}
}

fn decode_response(response: HttpResponse) -> Result<VerifyCustomTokenResponse> {
	let status = response.status();
	let body = response.into_body();

	if status != StatusCode::OK {
		let envelope: ErrorEnvelope = decode_json(&body, status, BodyKind::Error)?;

		return Err(Error::Service { status: status.as_u16(), response: envelope.error });
	}

	decode_json(&body, status, BodyKind::Success)
}

fn decode_json<T>(body: &[u8], status: StatusCode, kind: BodyKind) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de).map_err(|source| Error::Decode {
		status: status.as_u16(),
		body: kind,
		source,
	})
}
