use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use wprm_recipe_scraper::{to_json_lines, AppConfig, ScrapeError, Scraper};

#[derive(Parser, Debug)]
#[command(name = "wprm-scrape", version, about = "Scrape a WP Recipe Maker page and print it as JSON")]
struct Args {
    /// Recipe page to scrape; nothing happens without one
    url: Option<String>,

    /// Configuration file (defaults to ./config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

async fn run(url: &str, config: Option<PathBuf>) -> Result<String, ScrapeError> {
    let config = AppConfig::load(config.as_deref())?;
    let scraper = Scraper::from_config(&config)?;
    let recipe = scraper.build_recipe(url).await?;
    to_json_lines(&recipe)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let Some(url) = args.url else {
        return ExitCode::SUCCESS;
    };

    match run(&url, args.config).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to scrape {}: {}", url, e);
            ExitCode::FAILURE
        }
    }
}
