//! Construction-time settings for [`Client`](crate::client::Client).

// std
use std::sync::LazyLock;
// self
use crate::{_prelude::*, token::Secret};

/// Production `verifyCustomToken` endpoint.
pub const VERIFY_CUSTOM_TOKEN_ENDPOINT: &str =
	"https://www.googleapis.com/identitytoolkit/v3/relyingparty/verifyCustomToken";

static DEFAULT_ENDPOINT: LazyLock<Url> = LazyLock::new(|| {
	Url::parse(VERIFY_CUSTOM_TOKEN_ENDPOINT).expect("Built-in endpoint must be a valid URL.")
});

/// Errors raised while validating a [`ClientConfig`].
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ClientConfigError {
	/// Endpoints must use HTTPS.
	#[error("The endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// A zero timeout would fail every call.
	#[error("Timeout must be greater than zero.")]
	ZeroTimeout,
}

/// Settings applied when the client is built.
///
/// Values only come from [`ClientConfig::new`] or a validated [`ClientConfigBuilder`], so the
/// endpoint is always HTTPS and any timeout is non-zero.
///
/// ```compile_fail
/// use firebase_idtoken::{client::ClientConfig, token::Secret, url::Url};
///
/// let _ = ClientConfig {
/// 	api_key: Secret::new("k"),
/// 	endpoint: Url::parse("http://plain.example.com/verify").unwrap(),
/// 	timeout: None,
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	api_key: Secret,
	endpoint: Url,
	timeout: Option<StdDuration>,
}
impl ClientConfig {
	/// Creates the default configuration for `api_key`.
	pub fn new(api_key: impl Into<Secret>) -> Self {
		Self { api_key: api_key.into(), endpoint: DEFAULT_ENDPOINT.clone(), timeout: None }
	}

	/// Creates a new builder seeded with `api_key`.
	pub fn builder(api_key: impl Into<Secret>) -> ClientConfigBuilder {
		ClientConfigBuilder::new(api_key)
	}

	/// Project API key sent as the `key` query parameter.
	pub fn api_key(&self) -> &Secret {
		&self.api_key
	}

	/// Endpoint receiving the POST; defaults to [`VERIFY_CUSTOM_TOKEN_ENDPOINT`].
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Optional upper bound for a single call, on top of caller cancellation.
	pub fn timeout(&self) -> Option<StdDuration> {
		self.timeout
	}

	/// Endpoint with the `key` query parameter appended.
	pub(crate) fn request_url(&self) -> Url {
		let mut url = self.endpoint.clone();

		url.query_pairs_mut().append_pair("key", self.api_key.expose());

		url
	}

	fn validate(&self) -> Result<(), ClientConfigError> {
		if self.endpoint.scheme() != "https" {
			return Err(ClientConfigError::InsecureEndpoint { url: self.endpoint.to_string() });
		}
		if self.timeout.is_some_and(|timeout| timeout.is_zero()) {
			return Err(ClientConfigError::ZeroTimeout);
		}

		Ok(())
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// Project API key.
	pub api_key: Secret,
	/// Endpoint override.
	pub endpoint: Option<Url>,
	/// Per-call timeout.
	pub timeout: Option<StdDuration>,
}
impl ClientConfigBuilder {
	/// Creates a new builder seeded with `api_key`.
	pub fn new(api_key: impl Into<Secret>) -> Self {
		Self { api_key: api_key.into(), endpoint: None, timeout: None }
	}

	/// Overrides the endpoint (emulators, proxies, tests).
	pub fn endpoint(mut self, url: Url) -> Self {
		self.endpoint = Some(url);

		self
	}

	/// Bounds every call by `timeout`.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ClientConfigError> {
		let config = ClientConfig {
			api_key: self.api_key,
			endpoint: self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.clone()),
			timeout: self.timeout,
		};

		config.validate()?;

		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Failed to parse test URL.")
	}

	#[test]
	fn request_url_appends_api_key() {
		let config = ClientConfig::new("AIzaTestKey");

		assert_eq!(
			config.request_url().as_str(),
			"https://www.googleapis.com/identitytoolkit/v3/relyingparty/verifyCustomToken?key=AIzaTestKey"
		);
	}

	#[test]
	fn request_url_keeps_existing_query_and_escapes_key() {
		let config = ClientConfig::builder("a key&more")
			.endpoint(url("https://proxy.example.com/verify?tenant=acme"))
			.build()
			.expect("HTTPS endpoint should be accepted.");

		assert_eq!(
			config.request_url().as_str(),
			"https://proxy.example.com/verify?tenant=acme&key=a+key%26more"
		);
	}

	#[test]
	fn builder_rejects_insecure_endpoints_and_zero_timeouts() {
		let err = ClientConfig::builder("k")
			.endpoint(url("http://example.com/verify"))
			.build()
			.expect_err("Plain HTTP endpoints should be rejected.");

		assert!(matches!(err, ClientConfigError::InsecureEndpoint { .. }));

		let err = ClientConfig::builder("k")
			.timeout(StdDuration::ZERO)
			.build()
			.expect_err("Zero timeouts should be rejected.");

		assert_eq!(err, ClientConfigError::ZeroTimeout);
	}

	#[test]
	fn builder_defaults_match_new() {
		let built = ClientConfig::builder("k").build().expect("Defaults should validate.");

		assert_eq!(built, ClientConfig::new("k"));
		assert_eq!(built.endpoint().as_str(), VERIFY_CUSTOM_TOKEN_ENDPOINT);
		assert_eq!(built.timeout(), None);
	}

	#[test]
	fn built_config_exposes_only_validated_values() {
		let config = ClientConfig::builder("AIzaTestKey")
			.endpoint(url("https://emulator.example.com/verify"))
			.timeout(StdDuration::from_secs(3))
			.build()
			.expect("HTTPS endpoint and positive timeout should validate.");

		assert_eq!(config.api_key().expose(), "AIzaTestKey");
		assert_eq!(config.endpoint().scheme(), "https");
		assert_eq!(config.timeout(), Some(StdDuration::from_secs(3)));

		for endpoint in ["http://plain.example.com/verify", "ws://socket.example.com/verify"] {
			let err = ClientConfig::builder("AIzaTestKey")
				.endpoint(url(endpoint))
				.build()
				.expect_err("Non-HTTPS endpoints must never reach a client.");

			assert_eq!(err, ClientConfigError::InsecureEndpoint { url: endpoint.into() });
		}
	}
}
