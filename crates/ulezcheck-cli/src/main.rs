mod app;
mod display;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::level_filters::LevelFilter;
use ulezcheck_tfl::TflClient;
use ulezcheck_tfl::http::{DEFAULT_HGV_COMPLIANCE_URL, DEFAULT_VEHICLE_LOOKUP_URL};

/// Check a vehicle's ULEZ/LEZ/CC chargeability and HGV DVS compliance with TfL.
#[derive(Parser, Debug)]
#[command(name = "ulezcheck", version)]
struct Cli {
    /// Vehicle registration mark, sent to TfL as given.
    #[arg(value_name = "VEHICLE_LICENSE_NUMBER", allow_hyphen_values = true)]
    vrm: String,

    /// Vehicle lookup endpoint (POST).
    #[arg(long, env = "ULEZCHECK_VEHICLE_LOOKUP_URL", default_value = DEFAULT_VEHICLE_LOOKUP_URL)]
    vehicle_lookup_url: String,

    /// HGV compliance endpoint; the VRM is appended as a path segment.
    #[arg(long, env = "ULEZCHECK_HGV_COMPLIANCE_URL", default_value = DEFAULT_HGV_COMPLIANCE_URL)]
    hgv_compliance_url: String,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,

    /// Log requests and failures to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Exit status for an argument error. Help and version are not failures.
fn parse_error_status(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return Ok(ExitCode::from(parse_error_status(&err)));
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::ERROR
        })
        .with_writer(io::stderr)
        .init();
    tracing::debug!("ulezcheck v{}", env!("CARGO_PKG_VERSION"));

    if cli.no_color {
        colored::control::set_override(false);
    }

    let client = TflClient::with_endpoints(&cli.vehicle_lookup_url, &cli.hgv_compliance_url)
        .context("setting up TfL client")?;

    let outcome = app::run(
        &client,
        &cli.vrm,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .await?;
    Ok(ExitCode::from(outcome.exit_status()))
}
