//! Module containing the main Worldpay Total API client.

use crate::{
    apis::{
        payments::PaymentsApi, recurring::RecurringApi, reporting::ReportingApi,
        settlement::SettlementApi, tokenization::TokenizationApi, vault::VaultApi,
        WorldpayClientInner,
    },
    config::{Configuration, Credentials, DeveloperApplication},
    gateway::{DiagnosticCapture, Gateway},
    middlewares::{
        authentication::AuthenticationMiddleware, error_handling::ErrorHandlingMiddleware,
        inject_user_agent::InjectUserAgentMiddleware,
    },
    Error,
};
use anyhow::anyhow;
use reqwest::{redirect, Proxy, Url};
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::{DefaultSpanBackend, TracingMiddleware};
use serde::Serialize;
use serde_json::Value;
use std::{sync::Arc, time::Duration};

static DEMO_URL: &str = "https://gwapi.demo.securenet.com/api/";
static IPC_URL: &str = "http://localhost:8081/api/";
static PROXY_SCHEMES: &[&str] = &["http", "https", "socks5", "socks5h"];

/// Client for the Worldpay Total (SecureNet) gateway APIs.
///
/// Every call is sent once: nothing is retried, and the outcome of each call is bounded
/// by the configured timeout.
#[derive(Debug, Clone)]
pub struct WorldpayClient {
    /// Authorization, capture, void, refund and credit APIs.
    pub payments: PaymentsApi,
    /// Batch APIs.
    pub settlement: SettlementApi,
    /// Tokenization APIs.
    pub tokenization: TokenizationApi,
    /// Customer vault APIs.
    pub vault: VaultApi,
    /// Recurring, installment and variable payment plan APIs.
    pub recurring: RecurringApi,
    /// Transaction reporting APIs.
    pub reporting: ReportingApi,
    inner: Arc<WorldpayClientInner>,
}

impl WorldpayClient {
    /// Builds a new [`WorldpayClient`](crate::client::WorldpayClient) with the default configuration.
    pub fn new(credentials: Credentials) -> Result<WorldpayClient, Error> {
        WorldpayClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`WorldpayClient`](crate::client::WorldpayClient).
    pub fn builder(credentials: Credentials) -> WorldpayClientBuilder {
        WorldpayClientBuilder::new(credentials)
    }

    /// The configuration snapshot this client was built with.
    pub fn configuration(&self) -> &Configuration {
        self.inner.gateway.configuration()
    }

    /// Low-level gateway shared by all the API clients.
    pub fn gateway(&self) -> &Gateway {
        &self.inner.gateway
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> Arc<WorldpayClientInner> {
        self.inner.clone()
    }

    /// Issues a call by operation name and returns the raw JSON response.
    ///
    /// See [`Gateway::transact`](crate::gateway::Gateway::transact).
    pub async fn transact<T>(
        &self,
        operation: &str,
        payload: &T,
        params: &[&str],
    ) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        self.inner.gateway.transact(operation, payload, params).await
    }

    /// Builds a new client from a modified copy of the current configuration.
    ///
    /// The current client is left untouched.
    ///
    /// ```rust,no_run
    /// # use worldpay_total_rust::{WorldpayClient, config::Credentials};
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), worldpay_total_rust::Error> {
    /// let client = WorldpayClient::new(Credentials::new("8006912", "cQxbjK2bCDfp"))?;
    /// let patient = client.reconfigure(|cfg| cfg.timeout = Duration::from_secs(60))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn reconfigure<F>(&self, f: F) -> Result<WorldpayClient, Error>
    where
        F: FnOnce(&mut Configuration),
    {
        let previous = self.configuration();
        let mut configuration = previous.clone();
        f(&mut configuration);

        // A default developer application follows the environment unless the closure replaced it
        let default_application = Some(DeveloperApplication::for_environment(&previous.environment));
        if configuration.environment != previous.environment
            && configuration.developer_application == previous.developer_application
            && previous.developer_application == default_application
        {
            configuration.developer_application = Some(DeveloperApplication::for_environment(
                &configuration.environment,
            ));
        }

        WorldpayClientBuilder::from_configuration(configuration).build()
    }
}

/// Builder for a [`WorldpayClient`](crate::client::WorldpayClient).
#[derive(Debug)]
pub struct WorldpayClientBuilder {
    configuration: Configuration,
    developer_application_set: bool,
}

impl WorldpayClientBuilder {
    /// Creates a new builder to configure a [`WorldpayClient`](crate::client::WorldpayClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            configuration: Configuration::new(credentials),
            developer_application_set: false,
        }
    }

    fn from_configuration(configuration: Configuration) -> Self {
        Self {
            configuration,
            developer_application_set: true,
        }
    }

    /// Consumes the builder and builds a new [`WorldpayClient`](crate::client::WorldpayClient).
    pub fn build(mut self) -> Result<WorldpayClient, Error> {
        if !self.developer_application_set {
            self.configuration.developer_application = Some(DeveloperApplication::for_environment(
                &self.configuration.environment,
            ));
        }

        let client = build_client_with_middleware(&self.configuration)?;
        let inner = Arc::new(WorldpayClientInner {
            gateway: Gateway::new(client, Arc::new(self.configuration)),
        });

        Ok(WorldpayClient {
            payments: PaymentsApi::new(inner.clone()),
            settlement: SettlementApi::new(inner.clone()),
            tokenization: TokenizationApi::new(inner.clone()),
            vault: VaultApi::new(inner.clone()),
            recurring: RecurringApi::new(inner.clone()),
            reporting: ReportingApi::new(inner.clone()),
            inner,
        })
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to [`Environment::Demo`](crate::client::Environment::Demo).
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.configuration.environment = environment;
        self
    }

    /// Routes both HTTP and HTTPS traffic through the given proxy.
    pub fn with_proxy(mut self, proxy: Url) -> Self {
        self.configuration.proxy = Some(proxy);
        self
    }

    /// Sets the timeout of a single call.
    ///
    /// Defaults to 20 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.configuration.timeout = timeout;
        self
    }

    /// Sets how many redirects are followed before failing.
    ///
    /// Defaults to 10.
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.configuration.max_redirects = max_redirects;
        self
    }

    /// Sets the developer application stamped into request bodies.
    ///
    /// Use `None` to disable stamping. When not called, a default derived from the environment is used.
    pub fn with_developer_application(
        mut self,
        developer_application: impl Into<Option<DeveloperApplication>>,
    ) -> Self {
        self.configuration.developer_application = developer_application.into();
        self.developer_application_set = true;
        self
    }

    /// Sets the public key stamped into tokenization requests.
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.configuration.public_key = Some(public_key.into());
        self
    }

    /// Records every decoded response into the given capture sink.
    pub fn with_diagnostic_capture(mut self, capture: DiagnosticCapture) -> Self {
        self.configuration.capture = Some(capture);
        self
    }
}

/// Gateway environment to connect to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Public demo gateway.
    Demo,
    /// Locally hosted integrated payment controller.
    Ipc,
    /// Custom base URL, mostly useful for testing.
    Custom { base_url: Url },
}

impl Environment {
    /// Builds a custom environment from a single base URL.
    ///
    /// Relative endpoint paths are appended to the URL, so a trailing `/` is added when missing.
    pub fn from_single_url(url: &Url) -> Environment {
        let mut base_url = url.clone();
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Environment::Custom { base_url }
    }

    /// Base URL against which endpoint paths are resolved.
    pub fn base_url(&self) -> Url {
        match self {
            Environment::Demo => static_url(DEMO_URL),
            Environment::Ipc => static_url(IPC_URL),
            Environment::Custom { base_url } => base_url.clone(),
        }
    }

    /// `integrationType` reported in the developer application.
    pub fn integration_type(&self) -> u8 {
        match self {
            Environment::Ipc => 1,
            Environment::Demo | Environment::Custom { .. } => 0,
        }
    }
}

fn static_url(url: &'static str) -> Url {
    Url::parse(url).expect("Invalid built-in gateway URL")
}

fn build_client_with_middleware(
    configuration: &Configuration,
) -> Result<ClientWithMiddleware, Error> {
    let mut builder = reqwest::Client::builder()
        .timeout(configuration.timeout)
        .redirect(redirect::Policy::limited(configuration.max_redirects));

    if let Some(ref proxy) = configuration.proxy {
        if !PROXY_SCHEMES.contains(&proxy.scheme()) {
            return Err(Error::Other(anyhow!(
                "Unsupported proxy scheme: {}",
                proxy.scheme()
            )));
        }
        builder = builder.proxy(Proxy::all(proxy.clone())?);
    }

    let client = builder.build()?;

    Ok(reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::<DefaultSpanBackend>::new())
        .with(ErrorHandlingMiddleware)
        .with(InjectUserAgentMiddleware::new())
        .with(AuthenticationMiddleware::new(&configuration.credentials)?)
        .build())
}
