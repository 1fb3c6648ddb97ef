mod cli;
mod client;
mod commands;
mod config;
mod error;
mod fetch;
mod filter;
mod output;
mod projection;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use client::SeeClickFixClient;
use config::Config;
use error::Result;
use fetch::TokioThrottle;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Usage errors exit 1 like every other failure; --help and --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env("SCF_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so the report on stdout stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.quiet, cli.verbose);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "scf", &mut io::stdout());
        }
        Commands::Categories => {
            commands::categories::list()?;
        }
        Commands::Init => {
            commands::init::run()?;
        }
        Commands::Report(args) => {
            let config = Config::load()?;
            let client = SeeClickFixClient::new(config.api_url()?, config.timeout())?;
            let place = config.resolve_place(args.place.as_deref());

            commands::report::run(&client, &TokioThrottle, &place, config.page_delay(), args)
                .await?;
        }
    }

    Ok(())
}
