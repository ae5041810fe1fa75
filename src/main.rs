use std::path::PathBuf;

use chat_relay::{init_logging, load_app_config, run};
use clap::Parser;
use dotenv::dotenv;

/// Chat relay - forwards notebook prompts to an OpenAI chat model
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to an optional YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen host, overrides server.host
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides server.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    let args = Args::parse();

    init_logging();
    let mut cfg = load_app_config(args.config.as_deref())?;
    if let Some(host) = args.host {
        cfg.server.host = host;
    }
    if let Some(port) = args.port {
        cfg.server.port = port;
    }

    run(cfg).await
}
