use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paygate::application::checkout::{BatchPolicy, Checkout};
use paygate::domain::ports::{GatewaySettingsStore, GatewaySettingsStoreBox};
use paygate::infrastructure::in_memory::InMemoryGatewaySettingsStore;
use paygate::interfaces::csv::outcome_writer::OutcomeWriter;
use paygate::interfaces::csv::settings_reader::GatewaySettingsReader;
use paygate::interfaces::json::PaymentRequestReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding the batch of payment requests
    input: PathBuf,

    /// CSV file with per-gateway settings (endpoint URLs, credentials)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Stop dispatching after the first failed payment
    #[arg(long)]
    fail_fast: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let store = InMemoryGatewaySettingsStore::new();
    if let Some(path) = cli.settings {
        let file = File::open(path).into_diagnostic()?;
        for settings in GatewaySettingsReader::new(file).settings() {
            match settings {
                Ok(settings) => store.store(settings).await.into_diagnostic()?,
                Err(e) => tracing::warn!(error = %e, "skipping gateway settings row"),
            }
        }
    }

    let file = File::open(cli.input).into_diagnostic()?;
    let requests = PaymentRequestReader::new(file).requests().into_diagnostic()?;

    let policy = if cli.fail_fast {
        BatchPolicy::StopOnFailure
    } else {
        BatchPolicy::ContinueOnFailure
    };
    let settings: GatewaySettingsStoreBox = Box::new(store);
    let checkout = Checkout::new(settings).with_policy(policy);
    let report = checkout.run(requests).await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    writer.write_outcomes(&report.outcomes).into_diagnostic()?;

    Ok(())
}
