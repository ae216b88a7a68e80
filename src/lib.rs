//! Scrapes recipe pages marked up by the WP Recipe Maker plugin into a
//! structured [`Recipe`] and serializes it as JSON.

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pipelines;
pub mod selectors;
pub mod serialize;
pub mod server;

pub use config::{AppConfig, SelectorConfig};
pub use error::ScrapeError;
pub use model::{Ingredient, InstructionStep, NutritionFact, Recipe, RecipeMetadata};
pub use pipelines::{scrape_document, scrape_html, Scraper};
pub use selectors::SelectorSet;
pub use serialize::{to_json, to_json_lines};

/// Fetch and scrape `url` using configuration from `config.toml` and the environment.
pub async fn build_recipe(url: &str) -> Result<Recipe, ScrapeError> {
    let config = AppConfig::load(None)?;
    Scraper::from_config(&config)?.build_recipe(url).await
}
