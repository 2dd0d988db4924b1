use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use tido::core::config;
use tido::tui;

#[derive(Parser)]
#[command(name = "tido", about = "Terminal todo list synced with a remote endpoint")]
struct Args {
    /// Remote endpoint base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Maximum number of todos requested on load
    #[arg(long)]
    limit: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to tido.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("tido.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config error, falling back to defaults: {}", e);
        config::TidoConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.limit);

    log::info!("Tido starting up (remote: {})", resolved.base_url);

    tui::run(resolved)
}
