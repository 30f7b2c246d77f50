mod script;
mod settings;
mod test_data;

use anyhow::Context;
use clap::Parser;
use settings::Settings;
use std::{fs::File, path::PathBuf, process::ExitCode};
use test_data::TestData;
use tracing_subscriber::EnvFilter;
use url::Url;
use worldpay_total_rust::{gateway::DiagnosticCapture, WorldpayClient};

/// Runs a scripted sequence of calls against the Worldpay Total gateway.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Route every call through this HTTP(S) proxy.
    #[arg(short, long)]
    proxy: Option<Url>,
    /// Log verbosity (`error`, `warn`, `info`, `debug`, `trace` or any `EnvFilter` directive).
    #[arg(short, long)]
    log_level: Option<String>,
    /// Append every gateway response to this file.
    #[arg(short = 's', long)]
    capture: Option<PathBuf>,
    /// JSON file with the cardholder records used to fill in requests.
    #[arg(long)]
    test_data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Demo run failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let settings = Settings::read()?;

    let mut builder = WorldpayClient::builder(settings.credentials())
        .with_environment(settings.environment()?)
        .with_public_key(settings.public_key.as_str());
    if let Some(proxy) = args.proxy {
        builder = builder.with_proxy(proxy);
    }
    if let Some(ref path) = args.capture {
        let file = File::create(path)
            .with_context(|| format!("Could not create capture file {}", path.display()))?;
        builder = builder.with_diagnostic_capture(DiagnosticCapture::new(file));
    }
    let client = builder.build()?;

    let data = match args.test_data {
        Some(ref path) => TestData::from_file(path)?,
        None => TestData::builtin(),
    };
    tracing::info!(records = data.len(), "Loaded test data");

    println!("{}", "*".repeat(80));
    script::Script::new(client, data).run().await
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
