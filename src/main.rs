use clap::Parser;
use lookout::core::config;
use lookout::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "lookout", about = "Terminal client for the research assistant service")]
struct Args {
    /// Backend API base URL (overrides config file and LOOKOUT_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to lookout.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("lookout.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {e}");
            config::LookoutConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.api_url.as_deref());

    log::info!("Lookout starting up against {}", resolved.api_base_url);

    tui::run(resolved)
}
