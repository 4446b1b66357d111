//! Argument parsing, logging setup, and the run loop behind the `firebase-idtoken` binary.
//!
//! The binary is a linear pipeline: parse exactly two positional arguments, build a client,
//! exchange the custom token, and print the ID token on stdout. Logs go to stderr so the token
//! can be piped into other tools.

// std
use std::io::Write;
// crates.io
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
// self
use crate::{
	_prelude::*,
	client::{Client, ClientConfig, ClientConfigError},
	http::TokenHttpClient,
	token::VerifyCustomTokenRequest,
};

const AFTER_HELP: &str = "\
Arguments:
  API_KEY       Google Cloud Platform API key of the Firebase project.
  CUSTOM_TOKEN  Already issued Firebase custom token to convert into an ID token.

Output:
  The Firebase ID token, on stdout.";

/// Command-line arguments of `firebase-idtoken`.
#[derive(Clone, Debug, Parser)]
#[command(
	name = "firebase-idtoken",
	version,
	about = "Exchange a Firebase custom token for a Firebase ID token.",
	after_help = AFTER_HELP
)]
pub struct Cli {
	/// Google Cloud Platform API key.
	pub api_key: String,
	/// Firebase custom token to exchange.
	pub custom_token: String,
	/// Abort the exchange after this many seconds.
	#[arg(long, value_name = "SECONDS")]
	pub timeout: Option<u64>,
	/// Raise log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,
}
impl Cli {
	/// Client configuration derived from the arguments.
	pub fn client_config(&self) -> Result<ClientConfig, ClientConfigError> {
		let mut builder = ClientConfig::builder(self.api_key.as_str());

		if let Some(secs) = self.timeout {
			builder = builder.timeout(StdDuration::from_secs(secs));
		}

		builder.build()
	}

	/// Request sent for the given custom token.
	pub fn request(&self) -> VerifyCustomTokenRequest {
		VerifyCustomTokenRequest::new(self.custom_token.as_str())
	}

	/// Default log directive for the requested verbosity.
	pub fn log_directive(&self) -> &'static str {
		match self.verbose {
			0 => "warn",
			1 => "info",
			2 => "debug",
			_ => "trace",
		}
	}
}

/// Failures surfaced by [`run`].
#[derive(Debug, ThisError)]
pub enum CliError {
	/// Token exchange failed.
	#[error("VerifyCustomToken failed")]
	Verify(#[from] Error),
	/// Issued token could not be written.
	#[error("Failed to write the ID token")]
	Output(#[from] std::io::Error),
}

/// Installs the stderr `tracing` subscriber; `RUST_LOG` overrides the verbosity flags.
pub fn init_tracing(cli: &Cli) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

/// Cancels `cancel` when the process receives an interrupt (Ctrl-C).
pub async fn cancel_on_interrupt(cancel: CancellationToken) {
	match tokio::signal::ctrl_c().await {
		Ok(()) => {
			tracing::warn!("Interrupt received, cancelling the in-flight request.");

			cancel.cancel();
		},
		Err(e) => tracing::warn!("Unable to listen for interrupts: {e}."),
	}
}

/// Exchanges the custom token from `cli` and writes the ID token to `out`.
pub async fn run<C, W>(
	cli: &Cli,
	client: &Client<C>,
	cancel: &CancellationToken,
	out: &mut W,
) -> Result<(), CliError>
where
	C: ?Sized + TokenHttpClient,
	W: Write,
{
	let response = client.verify_custom_token_with_cancel(&cli.request(), cancel).await?;

	tracing::info!(
		is_new_user = response.is_new_user,
		expires_in = %response.expires_in,
		"Firebase ID token issued."
	);

	writeln!(out, "{}", response.id_token.expose())?;
	out.flush()?;

	Ok(())
}

/// Renders an error followed by its `source` chain, separated by `: `.
pub fn report(err: &dyn StdError) -> String {
	let mut rendered = err.to_string();
	let mut source = err.source();

	while let Some(cause) = source {
		rendered.push_str(": ");
		rendered.push_str(&cause.to_string());

		source = cause.source();
	}

	rendered
}

#[cfg(test)]
mod tests {
	// crates.io
	use clap::error::ErrorKind;
	// self
	use super::*;
	use crate::error::TransportError;

	#[test]
	fn parses_exactly_two_positionals() {
		let cli = Cli::try_parse_from(["firebase-idtoken", "AIzaTestKey", "custom-token-abc"])
			.expect("Two positional arguments should parse.");

		assert_eq!(cli.api_key, "AIzaTestKey");
		assert_eq!(cli.custom_token, "custom-token-abc");
		assert_eq!(cli.log_directive(), "warn");
		assert!(cli.request().return_secure_token);
		assert_eq!(cli.request().token.expose(), "custom-token-abc");
	}

	#[test]
	fn wrong_argument_counts_are_usage_errors() {
		for args in [
			vec!["firebase-idtoken"],
			vec!["firebase-idtoken", "AIzaTestKey"],
			vec!["firebase-idtoken", "AIzaTestKey", "custom-token-abc", "extra"],
		] {
			let err = Cli::try_parse_from(args.iter().copied())
				.expect_err("Argument count must be exactly two.");

			assert!(
				matches!(err.kind(), ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument),
				"Unexpected clap error kind {:?} for {args:?}.",
				err.kind()
			);
			assert_eq!(err.exit_code(), 2);
		}
	}

	#[test]
	fn timeout_and_verbosity_flags_feed_config() {
		let cli =
			Cli::try_parse_from(["firebase-idtoken", "-vv", "--timeout", "5", "AIzaTestKey", "tok"])
				.expect("Flags should parse.");
		let config = cli.client_config().expect("Positive timeout should validate.");

		assert_eq!(config.timeout(), Some(StdDuration::from_secs(5)));
		assert_eq!(config.api_key().expose(), "AIzaTestKey");
		assert_eq!(cli.log_directive(), "debug");

		let cli = Cli::try_parse_from(["firebase-idtoken", "--timeout", "0", "k", "t"])
			.expect("Flags should parse.");

		assert_eq!(cli.client_config(), Err(ClientConfigError::ZeroTimeout));
	}

	#[test]
	fn report_walks_the_source_chain() {
		let err = CliError::from(Error::from(TransportError::Cancelled));

		assert_eq!(
			report(&err),
			"VerifyCustomToken failed: Request was cancelled before the Identity Toolkit endpoint answered."
		);
	}
}
