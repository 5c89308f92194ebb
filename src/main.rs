use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use banana_client::api::{ApiClient, ApiEffects};
use banana_client::config::Config;
use banana_client::logging;
use banana_client::state::actions::ApiAction;
use banana_client::state::reducers::ApiReducer;
use banana_client::state::Store;
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

/// Command-line client for the banana backup monitor API.
#[derive(Parser, Debug)]
#[command(name = "banana-client", version, about)]
struct Cli {
    /// Path to the config file (default: <config dir>/banana/client.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the monitor API base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Print dispatched actions as JSON lines instead of the final state
    #[arg(long)]
    actions: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the monitor API is reachable
    Ping,
    /// List all known agents
    Agents,
    /// Show a single agent
    Agent {
        /// Organization the agent belongs to
        org: String,
        /// Common name of the agent certificate
        cn: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    config.apply_env();
    let config = config.with_api_url(cli.api_url.clone());
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let client = ApiClient::new(&config.api).context("Failed to create API client")?;
    tracing::debug!("Using monitor API at {}", client.base_url());

    let store: Store<ApiReducer> = Store::default();
    let (sender, mut receiver) = mpsc::unbounded_channel::<ApiAction>();
    let effects = ApiEffects::new(client, sender);

    let outcome = match &cli.command {
        Command::Ping => effects.ping().await,
        Command::Agents => effects.list_agents().await,
        Command::Agent { org, cn } => effects.get_agent(org, cn).await,
    };
    drop(effects);

    while let Some(action) = receiver.recv().await {
        if cli.actions {
            println!("{}", serde_json::to_string(&action)?);
        }
        store.dispatch(action);
    }

    if !cli.actions {
        let state = store.state();
        let slot = match &cli.command {
            Command::Ping => serde_json::to_value(&state.ping)?,
            Command::Agents => serde_json::to_value(&state.agents)?,
            Command::Agent { .. } => serde_json::to_value(&state.agent)?,
        };
        println!("{}", serde_json::to_string_pretty(&slot)?);
    }

    outcome.map(|_| ()).map_err(anyhow::Error::from)
}
