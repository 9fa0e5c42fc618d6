//! lodcast tile server
//!
//! Serves LOD-encoded point tiles, mandelbrot raster tiles, and the
//! prebuilt front-end assets.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "lodcast-server")]
#[command(about = "Tile preprocessing server for lodcast")]
struct Args {
    /// Directory of prebuilt front-end assets
    #[arg(long, default_value = "build")]
    assets: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lodcast_server=info".parse()?),
        )
        .init();

    let args = Args::parse();
    lodcast_server::server::run(&args.assets, &args.host, args.port).await
}
