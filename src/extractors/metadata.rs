use crate::extractors::text::{extract_joined_text, extract_text};
use crate::model::RecipeMetadata;
use crate::selectors::MetadataSelectors;
use log::debug;
use scraper::{Html, Selector};

/// Scalar recipe fields. `total_time` joins every total-time value and unit node.
pub fn scrape_metadata(document: &Html, selectors: &MetadataSelectors) -> RecipeMetadata {
    let field = |selector: &Selector| extract_text(document, selector);

    let metadata = RecipeMetadata {
        servings: field(&selectors.servings),
        servings_unit: field(&selectors.servings_unit),
        cuisine: field(&selectors.cuisine),
        course: field(&selectors.course),
        author: field(&selectors.author),
        prep_time: field(&selectors.prep_time),
        prep_time_unit: field(&selectors.prep_time_unit),
        cook_time: field(&selectors.cook_time),
        cook_time_unit: field(&selectors.cook_time_unit),
        total_time: extract_joined_text(document, &selectors.total_time),
        summary: field(&selectors.summary),
        title: field(&selectors.title),
    };

    debug!(
        "Servings: {} {}\tCuisine: {}\tCourse: {}\tAuthor: {}",
        metadata.servings,
        metadata.servings_unit,
        metadata.cuisine,
        metadata.course,
        metadata.author
    );
    debug!(
        "Prep Time: {} {}\tCook Time: {} {}\tTotal Time: {}",
        metadata.prep_time,
        metadata.prep_time_unit,
        metadata.cook_time,
        metadata.cook_time_unit,
        metadata.total_time
    );
    debug!("Title: {}", metadata.title);

    metadata
}
