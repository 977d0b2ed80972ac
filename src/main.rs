//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_stats_merge::{
    cli::{Commands, NbaStats},
    commands::{
        derive::handle_derive,
        game_logs::handle_fetch,
        merge::{handle_run, PipelineConfig},
    },
    nba::StatsClient,
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaStats::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Run {
            range,
            options,
            merged_out,
            result_out,
        } => {
            let api = StatsClient::from_env()?;
            handle_run(
                &api,
                PipelineConfig {
                    date_from: range.date_from,
                    date_to: range.date_to,
                    options: options.game_log_options(),
                    merged_out,
                    result_out,
                },
            )
            .await?
        }

        Commands::Fetch {
            category,
            range,
            options,
            out,
        } => {
            let api = StatsClient::from_env()?;
            handle_fetch(
                &api,
                category,
                range.date_from,
                range.date_to,
                &options.game_log_options(),
                out,
            )
            .await?
        }

        Commands::Derive { merged, result_out } => handle_derive(&merged, &result_out)?,
    }

    Ok(())
}
