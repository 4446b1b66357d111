//! Client-level error types shared by the transport, decoding, and CLI layers.

// self
use crate::{_prelude::*, client::ClientConfigError, token::ErrorResponse};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error returned by [`Client::verify_custom_token`](crate::client::Client).
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or request construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, cancellation).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Identity Toolkit rejected the request with a structured error body.
	#[error("Identity Toolkit rejected the request with HTTP {status}: {response}.")]
	Service {
		/// HTTP status code of the rejected call.
		status: u16,
		/// Decoded error payload.
		response: ErrorResponse,
	},
	/// Response body could not be decoded.
	#[error("Identity Toolkit returned a malformed {body} body with HTTP {status}.")]
	Decode {
		/// HTTP status code of the response.
		status: u16,
		/// Which body shape was expected.
		body: BodyKind,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl Error {
	/// Returns the decoded service error, if the failure came from the remote service.
	pub fn service_response(&self) -> Option<&ErrorResponse> {
		match self {
			Self::Service { response, .. } => Some(response),
			_ => None,
		}
	}

	/// Returns `true` when the call was abandoned because its token was cancelled.
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Transport(TransportError::Cancelled))
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn kind_label(&self) -> &'static str {
		match self {
			Self::Config(_) => "config",
			Self::Transport(_) => "transport",
			Self::Service { .. } => "service",
			Self::Decode { .. } => "decode",
		}
	}
}

/// Response body shapes the client decodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
	/// `200 OK` body carrying the issued tokens.
	Success,
	/// Non-200 body wrapping an [`ErrorResponse`].
	Error,
}
impl BodyKind {
	/// Returns a stable label suitable for messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}
impl Display for BodyKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Configuration and request construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Request body could not be serialized.
	#[error("Request body could not be encoded as JSON.")]
	RequestEncode(#[source] serde_json::Error),
	/// Client configuration failed validation.
	#[error(transparent)]
	InvalidConfig(#[from] ClientConfigError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, cancellation).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Identity Toolkit endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Identity Toolkit endpoint.")]
	Io(#[from] std::io::Error),
	/// Caller cancelled the in-flight request.
	#[error("Request was cancelled before the Identity Toolkit endpoint answered.")]
	Cancelled,
	/// Request exceeded its time budget.
	#[error("Request timed out while calling the Identity Toolkit endpoint.")]
	TimedOut {
		/// Configured budget, when the client enforced one.
		timeout: Option<StdDuration>,
	},
	/// Transport reported a failure without a typed cause.
	#[error("HTTP client error occurred while calling the Identity Toolkit endpoint: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn service_error_message_carries_code_and_message() {
		let err = Error::Service {
			status: 400,
			response: ErrorResponse {
				code: 400,
				message: "INVALID_CUSTOM_TOKEN".into(),
				errors: Vec::new(),
			},
		};
		let rendered = err.to_string();

		assert!(rendered.contains("400"), "{rendered}");
		assert!(rendered.contains("INVALID_CUSTOM_TOKEN"), "{rendered}");
		assert_eq!(err.kind_label(), "service");
		assert!(err.service_response().is_some());
	}

	#[test]
	fn cancellation_is_reported_as_transport_failure() {
		let err = Error::from(TransportError::Cancelled);

		assert!(err.is_cancelled());
		assert_eq!(err.kind_label(), "transport");
		assert!(err.service_response().is_none());
	}

	#[test]
	fn decode_error_exposes_json_path() {
		let mut de = serde_json::Deserializer::from_str("{\"error\":{\"code\":\"oops\"}}");
		let source = serde_path_to_error::deserialize::<_, crate::token::ErrorEnvelope>(&mut de)
			.expect_err("A string code must fail to decode.");
		let err = Error::Decode { status: 500, body: BodyKind::Error, source };

		assert!(err.to_string().contains("malformed error body"));

		match err {
			Error::Decode { source, .. } => assert_eq!(source.path().to_string(), "error.code"),
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}
}
