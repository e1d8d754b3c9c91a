use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use fgenesh_data_manager::app::{App, RunRequest};
use fgenesh_data_manager::domain::DatabaseKind;
use fgenesh_data_manager::error::FgeneshError;
use fgenesh_data_manager::output::JsonOutput;
use fgenesh_data_manager::transfer::HttpFetcher;

#[derive(Parser)]
#[command(name = "fgenesh-dm")]
#[command(about = "Download FGENESH reference data and register it in Galaxy data tables")]
#[command(disable_version_flag = true)]
struct Cli {
    #[arg(long, help = "Database kind: nr, par or matrix")]
    database: DatabaseKind,

    #[arg(long, help = "Build of the database")]
    build: String,

    #[arg(long, help = "Version tag recorded as the entry dbkey")]
    version: Option<String>,

    #[arg(long, help = "Path to the Galaxy JSON record (read, then overwritten)")]
    json: Utf8PathBuf,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<FgeneshError>() {
            return ExitCode::from(err.exit_code());
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let request = RunRequest {
        kind: cli.database,
        build: cli.build,
        version: cli.version,
        json_path: cli.json,
    };

    let app = App::new(HttpFetcher::new()?);
    let summary = app.run(&request)?;
    JsonOutput::print_summary(&summary).into_diagnostic()?;
    Ok(())
}
