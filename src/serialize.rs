use crate::error::ScrapeError;
use crate::model::Recipe;
use serde::Serialize;

/// Compact JSON for a recipe or any part of one.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ScrapeError> {
    serde_json::to_vec(value).map_err(ScrapeError::Serialization)
}

fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, ScrapeError> {
    serde_json::to_string(value).map_err(ScrapeError::Serialization)
}

/// Console layout: `{`, then metadata, nutrition, instructions and ingredients
/// on one line each, then `}`.
pub fn to_json_lines(recipe: &Recipe) -> Result<String, ScrapeError> {
    let lines = [
        "{".to_string(),
        to_json_string(&recipe.metadata)?,
        to_json_string(&recipe.nutrition)?,
        to_json_string(&recipe.instructions)?,
        to_json_string(&recipe.ingredients)?,
        "}".to_string(),
    ];
    Ok(lines.join("\n"))
}
