use arena_server::{commands::Command, config::read_config, state::AppState};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};


#[derive(Parser)]
#[command(version, about = "Tournament and round management server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = read_config();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging_config).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let state = AppState::new(config).await?;

    match cli.command {
        Some(command) => command.run(state).await,
        None => arena_server::serve(state).await,
    }
}
