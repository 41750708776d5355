/*
[INPUT]:  CLI arguments, YAML configuration file, OS shutdown signals
[OUTPUT]: A running operator console session with graceful teardown
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use callpoint_adapter::{CallpointClient, ClientConfig, Credentials};
use callpoint_console::{ConsoleConfig, ConsoleSession};

use cli::TermSink;

#[derive(Parser, Debug)]
#[command(name = "callpoint-console", version, about = "Operator tasking console")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Callback to bind; overrides the configured callback_id
    #[arg(long = "callback", value_name = "ID")]
    callback_id: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(
        config_path = %args.config_path.display(),
        "starting callpoint console"
    );

    let config = load_config(&args.config_path)?;
    let callback_id = args
        .callback_id
        .or(config.callback_id)
        .ok_or_else(|| anyhow!("no callback bound; pass --callback or set callback_id"))?;

    let client = build_client(&config)?;
    let sink = Arc::new(TermSink);

    let mut session = ConsoleSession::open(Arc::new(client), callback_id, sink).await;
    info!(callback_id, "session opened; polling started");

    tokio::select! {
        result = cli::run_console(&mut session) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("received SIGINT");
        }
    }

    session.close().await;
    info!(callback_id, "session closed");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<ConsoleConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    ConsoleConfig::from_file(path_str).context("load config")
}

fn build_client(config: &ConsoleConfig) -> Result<CallpointClient> {
    let mut client =
        CallpointClient::with_config_and_base_url(ClientConfig::default(), &config.backend.base_url)
            .context("create backend client")?;

    client.set_credentials(Credentials {
        api_token: config.backend.api_token.clone(),
        operator: config.backend.operator.clone(),
    });

    Ok(client)
}
