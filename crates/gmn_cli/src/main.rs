use anyhow::Result;
use clap::Parser;
use gmn_core::Config;
use gmn_feed::FeedClient;
use gmn_reader::ReaderClient;
use gmn_web::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "GMN News API server", long_about = None)]
struct Cli {
    /// Port to listen on; falls back to the PORT environment variable.
    #[arg(long)]
    port: Option<u16>,
    /// GameSpot API key; falls back to GAMESPOT_API_KEY.
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(api_key) = cli.api_key {
        config.api_key = api_key;
    }

    let state = AppState {
        feed: FeedClient::new(config.api_key.clone()),
        reader: ReaderClient::new(),
    };
    let app = gmn_web::create_app(state);

    // Bind all interfaces so http://localhost:<port> works reliably.
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("API listening -> http://localhost:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
