//! Binary to issue one authenticated Historical Data request against a
//! blpapi-http gateway and print the JSON response.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin hist_request --features cli -- \
//!     api.example.com --cert client.crt --key client.key --ca bloomberg.crt
//! ```
//!
//! Exits 0 on a successful round trip, 1 on any configuration, TLS,
//! transport, or gateway error.

use std::path::PathBuf;
use std::process::ExitCode;

use blphttp_rs::client::BlpClient;
use blphttp_rs::config::TlsConfig;
use blphttp_rs::constants::{DEFAULT_CLIENT_CERT, DEFAULT_CLIENT_KEY, HISTORICAL_DATA_PATH};
use blphttp_rs::types::historical::HistoricalDataQuery;
use clap::Parser;

/// Issue one mutual-TLS Historical Data request to a blpapi-http gateway.
#[derive(Debug, Parser)]
#[command(name = "hist_request", version)]
struct Args {
    /// Gateway hostname or address, optionally with a port.
    host: String,

    /// Client certificate path (PEM).
    #[arg(short = 'c', long, default_value = DEFAULT_CLIENT_CERT)]
    cert: PathBuf,

    /// Client private key path (PEM).
    #[arg(short = 'k', long, default_value = DEFAULT_CLIENT_KEY)]
    key: PathBuf,

    /// Trust root used to validate the server (system store when omitted).
    #[arg(long)]
    ca: Option<PathBuf>,

    /// Request path on the gateway.
    #[arg(long, default_value = HISTORICAL_DATA_PATH)]
    path: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error ({}): {err}", err.kind());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> blphttp_rs::Result<()> {
    let mut tls = TlsConfig::new(args.cert, args.key);
    if let Some(ca) = args.ca {
        tls = tls.with_trust_root(ca);
    }

    let client = BlpClient::new(&args.host, &tls)?;
    println!("POST {}{}", client.base_url(), args.path);

    let query = HistoricalDataQuery::default();
    let response: serde_json::Value = client.post(&args.path, &query).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
