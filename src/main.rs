use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use marketdesk::{api, server, MarketDesk};

#[derive(Parser)]
#[command(name = "marketdesk", about = "Market data aggregation backend")]
struct Cli {
    /// Port to listen on; the next 10 ports are tried if occupied
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Path of the settings JSON document
    #[arg(long, env = "SETTINGS_FILE", default_value = "settings.json")]
    settings_file: PathBuf,

    /// Directory served at the root path (client assets)
    #[arg(long, env = "STATIC_DIR", default_value = ".")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let desk = Arc::new(MarketDesk::new(&cli.settings_file));
    let app = api::router(desk, &cli.static_dir);

    let listener = match server::bind_with_retry(cli.port, server::PORT_RETRIES).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "failed to bind listener");
            std::process::exit(1);
        }
    };

    if let Ok(addr) = listener.local_addr() {
        tracing::info!("listening on http://{addr}");
    }

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
