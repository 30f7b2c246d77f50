use anyhow::Context;
use config::{Config, Environment, File};
use serde::Deserialize;
use worldpay_total_rust::{client, config::Credentials};

/// Merchant settings, read from `config.{json,toml}` and `WORLDPAY_*` environment variables.
#[derive(Deserialize, Debug)]
pub struct Settings {
    pub merchant_id: String,
    pub merchant_key: String,
    pub public_key: String,
    /// `demo` or `ipc`.
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "demo".to_string()
}

impl Settings {
    pub fn read() -> anyhow::Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("WORLDPAY"))
            .build()?
            .try_deserialize()
            .context("Missing merchant settings, set them in config.toml or WORLDPAY_* variables")?;

        if settings.merchant_id.trim().is_empty() || settings.merchant_key.trim().is_empty() {
            anyhow::bail!("Merchant id and key must not be empty");
        }

        Ok(settings)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.merchant_id.as_str(), self.merchant_key.as_str())
    }

    pub fn environment(&self) -> anyhow::Result<client::Environment> {
        match self.environment.to_ascii_lowercase().as_str() {
            "demo" => Ok(client::Environment::Demo),
            "ipc" => Ok(client::Environment::Ipc),
            other => anyhow::bail!("Unknown environment: {}", other),
        }
    }
}
