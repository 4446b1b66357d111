//! Request body of the `verifyCustomToken` call.

// self
use crate::{_prelude::*, token::Secret};

/// Body of the `verifyCustomToken` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCustomTokenRequest {
	/// Previously issued Firebase custom token.
	pub token: Secret,
	/// Forwarded verbatim; asks the service to return an ID/refresh token pair.
	pub return_secure_token: bool,
}
impl VerifyCustomTokenRequest {
	/// Creates a request for `token` with `returnSecureToken` set.
	pub fn new(token: impl Into<Secret>) -> Self {
		Self { token: token.into(), return_secure_token: true }
	}

	/// Overrides the `returnSecureToken` flag.
	pub fn with_return_secure_token(mut self, return_secure_token: bool) -> Self {
		self.return_secure_token = return_secure_token;

		self
	}
}
