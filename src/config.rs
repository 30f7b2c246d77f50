//! Configuration snapshot shared by every call issued through a [`WorldpayClient`](crate::WorldpayClient).
//!
//! A [`Configuration`] is immutable once the client is built. To change it, use
//! [`WorldpayClient::reconfigure`](crate::WorldpayClient::reconfigure), which builds a new client
//! from a modified copy and leaves calls in flight on the old one untouched.

use crate::{client::Environment, gateway::DiagnosticCapture};
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
pub(crate) const DEFAULT_MAX_REDIRECTS: usize = 10;
pub(crate) const DEFAULT_DEVELOPER_ID: u64 = 12345678;
pub(crate) const DEFAULT_APP_VERSION: &str = "0.1";

/// Merchant credentials used to authenticate against the gateway.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Credentials {
    /// SecureNet ID of the merchant.
    pub merchant_id: String,
    /// Secure key generated in the Virtual Terminal.
    pub merchant_key: MerchantKey,
}

impl Credentials {
    pub fn new(merchant_id: impl Into<String>, merchant_key: impl Into<MerchantKey>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_key: merchant_key.into(),
        }
    }

    /// Value of the `Authorization` header for these credentials.
    pub(crate) fn basic_authorization(&self) -> String {
        let encoded = STANDARD.encode(format!(
            "{}:{}",
            self.merchant_id,
            self.merchant_key.expose_secret()
        ));
        format!("Basic {}", encoded)
    }
}

/// Wrapper for the merchant secure key that makes it harder to accidentally expose it
/// and ensures the backing memory is wiped on drop.
///
/// ```rust
/// # use worldpay_total_rust::config::MerchantKey;
/// let key = MerchantKey::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", key).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`
/// assert_eq!(key.expose_secret(), "supersecret");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MerchantKey(#[serde(serialize_with = "serialize_secret")] Secret<String>);

impl MerchantKey {
    /// Wraps a secret string in a new `MerchantKey`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for MerchantKey
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        MerchantKey::new(s)
    }
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}

/// Identifies the integrating application. Stamped into every request body as `developerApplication`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperApplication {
    pub developer_id: u64,
    pub version: String,
    pub integration_type: u8,
}

impl DeveloperApplication {
    /// Default developer application for the given environment.
    pub fn for_environment(environment: &Environment) -> Self {
        Self {
            developer_id: DEFAULT_DEVELOPER_ID,
            version: DEFAULT_APP_VERSION.to_string(),
            integration_type: environment.integration_type(),
        }
    }
}

/// Immutable configuration of a client.
#[derive(Clone, Debug)]
pub struct Configuration {
    pub credentials: Credentials,
    pub environment: Environment,
    /// Forward proxy used for both HTTP and HTTPS traffic.
    pub proxy: Option<Url>,
    /// Upper bound on the duration of a single call, connection and body included.
    pub timeout: Duration,
    /// Redirects followed before a call fails with
    /// [`Error::TooManyRedirects`](crate::Error::TooManyRedirects).
    pub max_redirects: usize,
    /// `None` disables stamping of `developerApplication` into request bodies.
    pub developer_application: Option<DeveloperApplication>,
    /// Public key stamped into tokenization requests.
    pub public_key: Option<String>,
    /// Optional sink receiving a copy of every decoded response.
    pub capture: Option<DiagnosticCapture>,
}

impl Configuration {
    pub fn new(credentials: Credentials) -> Self {
        let environment = Environment::Demo;
        Self {
            credentials,
            developer_application: Some(DeveloperApplication::for_environment(&environment)),
            environment,
            proxy: None,
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            public_key: None,
            capture: None,
        }
    }
}
