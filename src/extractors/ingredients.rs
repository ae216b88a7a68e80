use crate::extractors::text::extract_row_text;
use crate::model::Ingredient;
use crate::selectors::IngredientSelectors;
use log::{debug, info};
use scraper::Html;

/// One [`Ingredient`] per ingredient row, in document order.
pub fn scrape_ingredients(document: &Html, selectors: &IngredientSelectors) -> Vec<Ingredient> {
    document
        .select(&selectors.row)
        .map(|row| {
            let amount = extract_row_text(row, &selectors.amount);
            let unit = extract_row_text(row, &selectors.unit);
            let name = extract_row_text(row, &selectors.name);

            if amount.is_empty() {
                // probably optional; nothing on the record marks it yet
                info!("Ingredient {:?} has no amount, may be optional", name);
            }
            debug!("Ingredient: {}\tAmount: {}\tUnit: {}", name, amount, unit);

            Ingredient { name, amount, unit }
        })
        .collect()
}
