mod ingredients;
mod instructions;
mod metadata;
mod nutrition;
pub mod text;

pub use self::ingredients::scrape_ingredients;
pub use self::instructions::scrape_instructions;
pub use self::metadata::scrape_metadata;
pub use self::nutrition::scrape_nutrition;
