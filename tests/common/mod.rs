// crates.io
use httpmock::MockServer;
// self
use firebase_idtoken::{
	client::{Client, ClientConfig, ClientConfigBuilder, ReqwestTokenClient},
	http::ReqwestHttpClient,
	reqwest::Client as ReqwestClient,
	url::Url,
};

pub const API_KEY: &str = "AIzaTestKey";
pub const VERIFY_PATH: &str = "/identitytoolkit/v3/relyingparty/verifyCustomToken";

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

/// Builds a client whose endpoint points at the mock server, letting `customize` adjust the
/// configuration (timeouts) before validation.
pub fn build_test_client(
	server: &MockServer,
	customize: impl FnOnce(ClientConfigBuilder) -> ClientConfigBuilder,
) -> ReqwestTokenClient {
	let endpoint =
		Url::parse(&server.url(VERIFY_PATH)).expect("Mock endpoint should parse successfully.");
	let config = customize(ClientConfig::builder(API_KEY).endpoint(endpoint))
		.build()
		.expect("Mock endpoint configuration should validate.");

	Client::with_http_client(config, test_reqwest_http_client())
}
