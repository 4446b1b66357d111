//! Exchanges a custom token against the live Identity Toolkit endpoint with the default reqwest
//! transport.
//!
//! Reads `API_KEY` and `FIREBASE_CUSTOM_TOKEN` from the environment.

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use firebase_idtoken::{client::Client, token::VerifyCustomTokenRequest};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let api_key = env::var("API_KEY").wrap_err("API_KEY must be set.")?;
	let custom_token =
		env::var("FIREBASE_CUSTOM_TOKEN").wrap_err("FIREBASE_CUSTOM_TOKEN must be set.")?;
	let client = Client::new(api_key);
	let response =
		client.verify_custom_token(&VerifyCustomTokenRequest::new(custom_token)).await?;

	println!("ID token: {}", response.id_token.expose());

	if let Some(lifetime) = response.lifetime() {
		println!("Expires in {} seconds.", lifetime.whole_seconds());
	}

	Ok(())
}
