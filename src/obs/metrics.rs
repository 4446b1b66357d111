// self
use crate::obs::{Operation, RequestOutcome};

/// Records a call outcome via the global metrics recorder (when enabled).
///
/// Service rejections are split by [`ServiceErrorKind`](crate::token::ServiceErrorKind) so an
/// invalid key or a mismatched project shows up apart from expired custom tokens.
pub fn record_request_outcome(operation: Operation, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		const NAME: &str = "firebase_idtoken_request_total";

		let operation = operation.as_str();
		let label = outcome.as_str();

		match (outcome.error_label(), outcome.service_label()) {
			(Some(error), Some(service_error)) => metrics::counter!(
				NAME,
				"operation" => operation,
				"outcome" => label,
				"error" => error,
				"service_error" => service_error
			)
			.increment(1),
			(Some(error), None) => metrics::counter!(
				NAME,
				"operation" => operation,
				"outcome" => label,
				"error" => error
			)
			.increment(1),
			_ => metrics::counter!(NAME, "operation" => operation, "outcome" => label).increment(1),
		}
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::token::ServiceErrorKind;

	#[test]
	fn record_request_outcome_without_recorder_is_noop() {
		record_request_outcome(Operation::VerifyCustomToken, RequestOutcome::Attempt);
		record_request_outcome(
			Operation::VerifyCustomToken,
			RequestOutcome::Failure { error: "service", service: Some(ServiceErrorKind::Other) },
		);
	}
}
