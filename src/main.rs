mod action;

use clap::Parser;
use mock_checkout::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    let args = action::AppArgs::parse();

    args.run().await
}
