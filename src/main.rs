//! kbd-led-web Server Binary
//!
//! Starts the HTTP server that bridges a browser UI to the external
//! keyboard backlight control utility.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults (127.0.0.1:3000, system76-kbd-led++ on PATH)
//! kbd-led-web
//!
//! # Override the bind address and the control utility
//! kbd-led-web --port 8080 --command /usr/local/bin/system76-kbd-led++
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kbd_led_web::config::Config;
use kbd_led_web::web;

/// HTTP bridge for the System76 keyboard backlight control utility
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Backlight control program to invoke (overrides config)
    #[arg(long)]
    command: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration, then apply CLI overrides
    let mut config = Config::load().unwrap_or_default();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(command) = args.command {
        config.device.command = command;
    }

    info!("Backlight utility: {}", config.device.command);

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Start the server
    web::run_server(config, addr).await
}
