use clap::Parser;
use presentation::cli::{Cli, CliApp};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = CliApp::new();
    app.run(cli).await?;
    Ok(())
}
