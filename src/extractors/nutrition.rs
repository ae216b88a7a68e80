use crate::extractors::text::extract_row_text;
use crate::model::NutritionFact;
use crate::selectors::NutritionSelectors;
use log::debug;
use scraper::Html;

pub fn scrape_nutrition(document: &Html, selectors: &NutritionSelectors) -> Vec<NutritionFact> {
    document
        .select(&selectors.row)
        .map(|row| {
            let fact = NutritionFact {
                amount: extract_row_text(row, &selectors.value),
                unit: extract_row_text(row, &selectors.unit),
                name: extract_row_text(row, &selectors.label),
            };
            debug!(
                "Nutrition Label: {}\tAmount: {}\tUnit: {}",
                fact.name, fact.amount, fact.unit
            );
            fact
        })
        .collect()
}
