use crate::demo::{run_contract, run_demo, run_score, ContractArgs, DemoArgs, ScoreArgs};
use crate::infra::load_catalog;
use crate::shell::run_shell;
use clap::{Parser, Subcommand};
use covoimmo::config::{AppConfig, CatalogConfig};
use covoimmo::error::AppError;
use covoimmo::telemetry;
use covoimmo::workflows::colocation::SessionService;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "covoimmo",
    about = "Browse shared-housing listings, check compatibility and draft a co-tenancy contract",
    version
)]
struct Cli {
    /// Listings file (.json or .csv). Overrides APP_LISTINGS.
    #[arg(long, global = true)]
    listings: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through every screen with a scripted session (default command)
    Demo(DemoArgs),
    /// Print search results with compatibility breakdowns for a profile
    Score(ScoreArgs),
    /// Print the co-tenancy contract for a profile and optional listing
    Contract(ContractArgs),
    /// Drive a session interactively from stdin
    Shell,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.listings {
        config.catalog = CatalogConfig::new(Some(path))?;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(load_catalog(&config.catalog)?);
    info!(
        environment = ?config.environment,
        listings = catalog.len(),
        "listing catalog ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(&mut out, SessionService::new(catalog), args)?,
        Command::Score(args) => run_score(&mut out, SessionService::new(catalog), args)?,
        Command::Contract(args) => run_contract(&mut out, SessionService::new(catalog), args)?,
        Command::Shell => {
            let stdin = io::stdin();
            let mut service = SessionService::new(catalog);
            run_shell(stdin.lock(), &mut out, &mut service)?;
        }
    }

    out.flush()?;
    Ok(())
}
