use anyhow::Result;
use swipedeck::backend::create_backend;
use swipedeck::config::Config;
use swipedeck::logger::Logger;
use swipedeck::sync::SyncService;
use swipedeck::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("swipedeck {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.iter().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    if let Some(path) = logger.log_file_path() {
        logger.log(format!("Logging to {}", path.display()));
    }

    let backend = create_backend(&config.backend)?;
    let sync_service = SyncService::new(backend, logger);

    // Run the TUI application
    ui::run_app(config, sync_service).await?;

    Ok(())
}
