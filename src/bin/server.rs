use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use wprm_recipe_scraper::{server, AppConfig};

#[derive(Parser, Debug)]
#[command(name = "wprm-server", version, about = "Serve recipe scraping over HTTP (POST /new)")]
struct Args {
    /// Configuration file (defaults to ./config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting recipe scraper server");
    if let Err(e) = server::serve(&config).await {
        error!("Server stopped: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
