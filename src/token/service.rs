//! Structured error bodies returned by Identity Toolkit and their classification.

// self
use crate::_prelude::*;

/// Wire envelope of every non-200 Identity Toolkit response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
	/// Wrapped error payload.
	pub error: ErrorResponse,
}

/// Structured service error decoded from a non-200 response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("code = {code}, message = {message}")]
pub struct ErrorResponse {
	/// Numeric error code, usually mirroring the HTTP status.
	pub code: i32,
	/// Human-readable message; Identity Toolkit puts its machine-readable code first.
	#[serde(default)]
	pub message: String,
	/// Detailed error entries in the order the service reported them.
	#[serde(default)]
	pub errors: Vec<ErrorDetail>,
}
impl ErrorResponse {
	/// Classifies the failure into a [`ServiceErrorKind`].
	///
	/// The leading token of `message` wins; detail `reason` fields are consulted next.
	pub fn kind(&self) -> ServiceErrorKind {
		let head = self.message.split([' ', ':']).next().unwrap_or_default();
		let by_message = ServiceErrorKind::from_code(head);

		if by_message != ServiceErrorKind::Other {
			return by_message;
		}
		if self.message.starts_with("API key not valid")
			|| self.errors.iter().any(|detail| detail.reason == "keyInvalid")
		{
			return ServiceErrorKind::InvalidApiKey;
		}

		self.errors
			.iter()
			.map(|detail| ServiceErrorKind::from_code(&detail.message))
			.find(|kind| *kind != ServiceErrorKind::Other)
			.unwrap_or(ServiceErrorKind::Other)
	}
}

/// Single entry of [`ErrorResponse::errors`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
	/// Entry message.
	#[serde(default)]
	pub message: String,
	/// Error domain, e.g. `global` or `usageLimits`.
	#[serde(default)]
	pub domain: String,
	/// Machine-readable reason, e.g. `invalid` or `keyInvalid`.
	#[serde(default)]
	pub reason: String,
}

/// Well-known Identity Toolkit failure categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
	/// Custom token is malformed, expired, or signed incorrectly.
	InvalidCustomToken,
	/// Custom token was minted for a different Firebase project.
	CredentialMismatch,
	/// API key is missing or not valid for the project.
	InvalidApiKey,
	/// User account behind the token is disabled.
	UserDisabled,
	/// Request was throttled.
	TooManyAttempts,
	/// Anything not covered above.
	Other,
}
impl ServiceErrorKind {
	/// Maps an Identity Toolkit error code (e.g. `INVALID_CUSTOM_TOKEN`) onto a kind.
	pub fn from_code(code: &str) -> Self {
		match code.trim() {
			"INVALID_CUSTOM_TOKEN" => Self::InvalidCustomToken,
			"CREDENTIAL_MISMATCH" => Self::CredentialMismatch,
			"API_KEY_INVALID" | "INVALID_API_KEY" => Self::InvalidApiKey,
			"USER_DISABLED" => Self::UserDisabled,
			"TOO_MANY_ATTEMPTS_TRY_LATER" | "QUOTA_EXCEEDED" => Self::TooManyAttempts,
			_ => Self::Other,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::InvalidCustomToken => "invalid_custom_token",
			Self::CredentialMismatch => "credential_mismatch",
			Self::InvalidApiKey => "invalid_api_key",
			Self::UserDisabled => "user_disabled",
			Self::TooManyAttempts => "too_many_attempts",
			Self::Other => "other",
		}
	}
}
impl Display for ServiceErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(message: &str, errors: Vec<ErrorDetail>) -> ErrorResponse {
		ErrorResponse { code: 400, message: message.into(), errors }
	}

	#[test]
	fn envelope_decodes_ordered_details() {
		let envelope: ErrorEnvelope = serde_json::from_str(
			r#"{"error":{"code":400,"message":"INVALID_CUSTOM_TOKEN","errors":[
				{"message":"INVALID_CUSTOM_TOKEN","domain":"global","reason":"invalid"},
				{"message":"second","domain":"usageLimits","reason":"other"}
			]}}"#,
		)
		.expect("Error envelope should decode.");
		let error = envelope.error;

		assert_eq!(error.code, 400);
		assert_eq!(error.message, "INVALID_CUSTOM_TOKEN");
		assert_eq!(error.errors.len(), 2);
		assert_eq!(error.errors[0].domain, "global");
		assert_eq!(error.errors[1].message, "second");
		assert_eq!(error.to_string(), "code = 400, message = INVALID_CUSTOM_TOKEN");
	}

	#[test]
	fn kind_reads_leading_message_code() {
		assert_eq!(
			response("INVALID_CUSTOM_TOKEN : Token expired.", Vec::new()).kind(),
			ServiceErrorKind::InvalidCustomToken
		);
		assert_eq!(
			response("CREDENTIAL_MISMATCH", Vec::new()).kind(),
			ServiceErrorKind::CredentialMismatch
		);
		assert_eq!(
			response("TOO_MANY_ATTEMPTS_TRY_LATER", Vec::new()).kind(),
			ServiceErrorKind::TooManyAttempts
		);
	}

	#[test]
	fn kind_falls_back_to_key_hints_and_details() {
		assert_eq!(
			response("API key not valid. Please pass a valid API key.", Vec::new()).kind(),
			ServiceErrorKind::InvalidApiKey
		);

		let detail = ErrorDetail {
			reason: "keyInvalid".into(),
			domain: "usageLimits".into(),
			..Default::default()
		};

		assert_eq!(response("Bad Request", vec![detail]).kind(), ServiceErrorKind::InvalidApiKey);

		let detail = ErrorDetail { message: "USER_DISABLED".into(), ..Default::default() };

		assert_eq!(response("Bad Request", vec![detail]).kind(), ServiceErrorKind::UserDisabled);
		assert_eq!(response("", Vec::new()).kind(), ServiceErrorKind::Other);
	}
}
