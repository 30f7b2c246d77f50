use reqwest::Url;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};
use worldpay_total_rust::{
    client::{Environment, WorldpayClientBuilder},
    config::Credentials,
    WorldpayClient,
};

pub static MERCHANT_ID: &str = "8006912";
pub static MERCHANT_KEY: &str = "cQxbjK2bCDfp";
pub static PUBLIC_KEY: &str = "278DB5D9-6B9A-4E53-9E2C-02E8CC8B3C8B";

/// A mock gateway plus a client pointed at it.
pub struct TestContext {
    pub client: WorldpayClient,
    pub mock_server: MockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        Self::start_with(|builder| builder).await
    }

    /// Starts a new mock gateway and lets the test customise the client configuration.
    pub async fn start_with<F>(configure: F) -> Self
    where
        F: FnOnce(WorldpayClientBuilder) -> WorldpayClientBuilder,
    {
        let mock_server = MockServer::start().await;

        let builder = WorldpayClient::builder(Credentials::new(MERCHANT_ID, MERCHANT_KEY))
            .with_environment(Environment::from_single_url(&Url::parse(&mock_server.uri()).unwrap()))
            .with_public_key(PUBLIC_KEY);
        let client = configure(builder).build().unwrap();

        Self {
            client,
            mock_server,
        }
    }

    /// Answers `verb path` with an approved response merged with `body`.
    pub async fn approve(&self, verb: &str, endpoint: &str, body: Value) {
        let mut response = json!({
            "success": true,
            "result": "APPROVED",
            "responseCode": 1,
            "message": "SUCCESS"
        });
        if let (Value::Object(response), Value::Object(body)) = (&mut response, body) {
            response.extend(body);
        }

        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.mock_server)
            .await;
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&self.mock_server.uri()).unwrap()
    }
}
