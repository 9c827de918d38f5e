use tracing_subscriber::EnvFilter;
use worktimer::commands::Cli;
use worktimer::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("worktimer=debug")))
            .with_target(false)
            .init();
    }

    Cli::menu().await
}
