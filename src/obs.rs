//! Optional observability helpers for client calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap every call in a span named `firebase_idtoken.request` with the
//!   `operation` field; the terminal `outcome`, `error`, and `service_error` fields are recorded
//!   on the span once the call settles.
//! - Enable `metrics` to increment the `firebase_idtoken_request_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`. Failures add `error`, and
//!   rejections by Identity Toolkit add `service_error` (a [`ServiceErrorKind`] label).

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, token::ServiceErrorKind};

/// Remote operations issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// `relyingparty/verifyCustomToken` exchange.
	VerifyCustomToken,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::VerifyCustomToken => "verify_custom_token",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure {
		/// [`Error::kind_label`] of the failure.
		error: &'static str,
		/// Classification of the service rejection, for [`Error::Service`] failures only.
		service: Option<ServiceErrorKind>,
	},
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure { .. } => "failure",
		}
	}

	/// Derives the terminal outcome of a finished call.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => RequestOutcome::Success,
			Err(e) => RequestOutcome::Failure {
				error: e.kind_label(),
				service: e.service_response().map(|response| response.kind()),
			},
		}
	}

	/// Failure kind label, when the outcome is a failure.
	pub const fn error_label(self) -> Option<&'static str> {
		match self {
			RequestOutcome::Failure { error, .. } => Some(error),
			_ => None,
		}
	}

	/// Service rejection label, when Identity Toolkit answered with an error body.
	pub fn service_label(self) -> Option<&'static str> {
		match self {
			RequestOutcome::Failure { service, .. } => service.map(ServiceErrorKind::as_str),
			_ => None,
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
