use crate::config::AppConfig;
use crate::error::ScrapeError;
use crate::extractors::{
    scrape_ingredients, scrape_instructions, scrape_metadata, scrape_nutrition,
};
use crate::fetchers::RequestFetcher;
use crate::model::Recipe;
use crate::selectors::SelectorSet;
use log::info;
use scraper::Html;
use std::sync::Arc;

/// Run every section scraper over one parsed document.
///
/// Sections are filled in a fixed order: ingredients, instructions,
/// nutrition, metadata. None of them depends on another.
pub fn scrape_document(document: &Html, selectors: &SelectorSet) -> Recipe {
    let ingredients = scrape_ingredients(document, &selectors.ingredients);
    let instructions = scrape_instructions(document, &selectors.instructions);
    let nutrition = scrape_nutrition(document, &selectors.nutrition);
    let metadata = scrape_metadata(document, &selectors.metadata);

    Recipe {
        metadata,
        nutrition,
        instructions,
        ingredients,
    }
}

/// Parse `html` and scrape it.
pub fn scrape_html(html: &str, selectors: &SelectorSet) -> Recipe {
    let document = Html::parse_document(html);
    scrape_document(&document, selectors)
}

/// Fetches a recipe page once and scrapes every section from that single snapshot.
pub struct Scraper {
    fetcher: RequestFetcher,
    selectors: Arc<SelectorSet>,
}

impl Scraper {
    pub fn new(fetcher: RequestFetcher, selectors: Arc<SelectorSet>) -> Self {
        Self { fetcher, selectors }
    }

    /// Build a scraper from loaded configuration, compiling the selector table.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScrapeError> {
        let fetcher = RequestFetcher::new(&config.user_agent, config.fetch_timeout())?;
        let selectors = SelectorSet::compile(&config.selectors)?;
        Ok(Self::new(fetcher, Arc::new(selectors)))
    }

    /// Fetch `url` and assemble a complete [`Recipe`].
    ///
    /// Fetch and parse failures abort the whole pass; no partial recipe is returned.
    pub async fn build_recipe(&self, url: &str) -> Result<Recipe, ScrapeError> {
        info!("Initiating scraping on URL: {}", url);

        let html = self.fetcher.fetch(url).await?;
        let recipe = scrape_html(&html, &self.selectors);

        info!(
            "Scraped {} ingredients, {} instructions, {} nutrition facts from {}",
            recipe.ingredients.len(),
            recipe.instructions.len(),
            recipe.nutrition.len(),
            url
        );

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_gives_empty_recipe() {
        let recipe = scrape_html("<html><body></body></html>", &SelectorSet::default());
        assert_eq!(recipe, Recipe::default());
    }
}
