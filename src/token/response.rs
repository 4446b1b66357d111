//! Successful `verifyCustomToken` payload and expiry helpers.

// self
use crate::{_prelude::*, token::Secret};

/// Successful `verifyCustomToken` payload.
///
/// Only `idToken` is mandatory; the remaining fields default when the service omits them
/// (for example `refreshToken` when `returnSecureToken` was `false`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCustomTokenResponse {
	/// Resource kind reported by Identity Toolkit.
	#[serde(default)]
	pub kind: String,
	/// Issued Firebase ID token.
	pub id_token: Secret,
	/// Refresh token paired with the ID token.
	#[serde(default)]
	pub refresh_token: Secret,
	/// ID token lifetime in seconds, encoded as decimal text.
	#[serde(default)]
	pub expires_in: String,
	/// Whether the exchange created the user.
	#[serde(default)]
	pub is_new_user: bool,
}
impl VerifyCustomTokenResponse {
	/// Parses `expiresIn` into a positive duration.
	pub fn lifetime(&self) -> Option<Duration> {
		let secs = self.expires_in.trim().parse::<i64>().ok()?;

		(secs > 0).then_some(Duration::seconds(secs))
	}

	/// Computes the ID token expiry relative to `issued_at`.
	pub fn expires_at(&self, issued_at: OffsetDateTime) -> Option<OffsetDateTime> {
		issued_at.checked_add(self.lifetime()?)
	}
}
