use clap::Parser;
use tracing::error;

use pillar::cli::Cli;
use pillar::logging::init_tracing;

#[tokio::main]
async fn main() {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let guard = init_tracing(cli.debug_enabled());

    if let Err(e) = cli.run().await {
        error!("command failed: {:#}", e);
        drop(guard);
        std::process::exit(1);
    }
}
