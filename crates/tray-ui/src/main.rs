//! Lunch Tray - main entry point.
//!
//! Loads configuration, builds the ordering session and runs it on
//! stdin/stdout. Logs go to stderr.

use tray_core::find_config_path;
use tray_ui::cli::{parse_config_arg, resolve_config};
use tray_ui::TrayApp;

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging on stderr so screens on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Lunch Tray starting...");

    let config = match parse_config_arg(std::env::args().skip(1))
        .and_then(|explicit| resolve_config(explicit.as_deref(), find_config_path()))
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Tax rate {}, {} menu items",
        config.tax_rate,
        config.menu().len()
    );

    let app = TrayApp::new(&config);
    let stdin = std::io::stdin();
    if let Err(e) = app.run(stdin.lock(), std::io::stdout()) {
        tracing::error!("Session ended with error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
