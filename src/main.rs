use jrep::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging only when the operator asks for it; user-facing
    // messages route through the msg_* macros either way.
    if std::env::var("JREP_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jrep=debug")))
            .init();
    }

    Cli::menu().await
}
