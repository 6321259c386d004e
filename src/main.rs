use anyhow::Result;
use lextrack::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing output is only wired up when debug mode is requested;
    // normal runs print plain console messages instead.
    if std::env::var("LEXTRACK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    Cli::menu().await
}
