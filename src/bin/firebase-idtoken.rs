//! `firebase-idtoken <API_KEY> <CUSTOM_TOKEN>`: print a Firebase ID token for a custom token.

// std
use std::{io, process::ExitCode};
// crates.io
use clap::Parser;
// self
use firebase_idtoken::{
	CancellationToken,
	cli::{self, Cli},
	client::Client,
};

#[tokio::main]
async fn main() -> ExitCode {
	// Wrong argument counts print usage and exit with status 2 before any network call.
	let cli = Cli::parse();

	cli::init_tracing(&cli);

	let config = match cli.client_config() {
		Ok(config) => config,
		Err(e) => {
			tracing::error!("Invalid configuration: {e}");

			return ExitCode::FAILURE;
		},
	};
	let client = Client::from_config(config);
	let cancel = CancellationToken::new();

	tokio::spawn(cli::cancel_on_interrupt(cancel.clone()));

	match cli::run(&cli, &client, &cancel, &mut io::stdout()).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			tracing::error!("{}", cli::report(&e));

			ExitCode::FAILURE
		},
	}
}
