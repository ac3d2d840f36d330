use std::process::ExitCode;

use tracing::{error, info, warn};

use music_hub::{Config, Database, MediaStorage, WebServer};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = music_hub::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        music_hub::logging::init_console_only(&config.logging.level);
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> music_hub::Result<()> {
    let storage = MediaStorage::new(&config.files.upload_dir)?;
    let absolute = storage
        .base_path()
        .canonicalize()
        .unwrap_or_else(|_| storage.base_path().to_path_buf());

    info!("{}", "=".repeat(50));
    info!("Music Hub server starting");
    info!("Upload folder: {}", config.files.upload_dir);
    info!("Absolute path: {}", absolute.display());
    info!("Database: {}", config.database.path);
    info!("Listening on: http://{}", config.listen_addr());
    info!("{}", "=".repeat(50));

    match storage.probe_writable().await {
        Ok(()) => info!("Upload folder is writable"),
        Err(e) => warn!("Upload folder is not writable: {}", e),
    }

    let db = Database::open(&config.database.path).await?;
    info!("Database ready (schema version {})", db.schema_version().await?);

    let server = WebServer::new(&config, db, storage)?;
    server.run().await?;

    Ok(())
}
