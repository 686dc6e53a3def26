use anyhow::Context;
use clap::Parser;
use wp_config::WaypointConfig;

mod cli;
mod commands;
mod output;
mod progress;

use cli::Commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("wpt error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags, matches!(cli.command, Commands::Serve(_)))?;

    match cli.command {
        Commands::Schema(args) => commands::schema::handle(&args, &flags),
        command => {
            let config = WaypointConfig::load_with_dotenv(flags.config.as_deref())
                .context("failed to load configuration")?;
            dispatch(command, config, &flags).await
        }
    }
}

async fn dispatch(
    command: Commands,
    config: WaypointConfig,
    flags: &cli::GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Seed(args) => commands::seed::handle(&args, &config, flags).await,
        Commands::Validate(args) => commands::validate::handle(&args, &config, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}

/// `WAYPOINT_LOG` wins; otherwise the level follows `--quiet`/`--verbose`.
/// The server logs at `info` by default so requests are visible.
fn init_tracing(flags: &cli::GlobalFlags, serving: bool) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else if serving {
        "info"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WAYPOINT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
