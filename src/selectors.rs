use crate::config::SelectorConfig;
use crate::error::ScrapeError;
use scraper::Selector;

/// The selector table, parsed once and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct SelectorSet {
    pub ingredients: IngredientSelectors,
    pub instructions: InstructionSelectors,
    pub nutrition: NutritionSelectors,
    pub metadata: MetadataSelectors,
}

/// `row` picks one ingredient line; the others apply inside each row.
#[derive(Debug, Clone)]
pub struct IngredientSelectors {
    pub row: Selector,
    pub amount: Selector,
    pub unit: Selector,
    pub name: Selector,
}

#[derive(Debug, Clone)]
pub struct InstructionSelectors {
    pub row: Selector,
    pub text: Selector,
}

#[derive(Debug, Clone)]
pub struct NutritionSelectors {
    pub row: Selector,
    pub value: Selector,
    pub unit: Selector,
    pub label: Selector,
}

#[derive(Debug, Clone)]
pub struct MetadataSelectors {
    pub servings: Selector,
    pub servings_unit: Selector,
    pub cuisine: Selector,
    pub course: Selector,
    pub author: Selector,
    pub prep_time: Selector,
    pub prep_time_unit: Selector,
    pub cook_time: Selector,
    pub cook_time_unit: Selector,
    pub total_time: Selector,
    pub summary: Selector,
    pub title: Selector,
}

fn parse(field: &'static str, selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        field,
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

impl SelectorSet {
    pub fn compile(config: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            ingredients: IngredientSelectors {
                row: parse("ingredient_row", &config.ingredient_row)?,
                amount: parse("ingredient_amount", &config.ingredient_amount)?,
                unit: parse("ingredient_unit", &config.ingredient_unit)?,
                name: parse("ingredient_name", &config.ingredient_name)?,
            },
            instructions: InstructionSelectors {
                row: parse("instruction_row", &config.instruction_row)?,
                text: parse("instruction_text", &config.instruction_text)?,
            },
            nutrition: NutritionSelectors {
                row: parse("nutrition_row", &config.nutrition_row)?,
                value: parse("nutrition_value", &config.nutrition_value)?,
                unit: parse("nutrition_unit", &config.nutrition_unit)?,
                label: parse("nutrition_label", &config.nutrition_label)?,
            },
            metadata: MetadataSelectors {
                servings: parse("servings", &config.servings)?,
                servings_unit: parse("servings_unit", &config.servings_unit)?,
                cuisine: parse("cuisine", &config.cuisine)?,
                course: parse("course", &config.course)?,
                author: parse("author", &config.author)?,
                prep_time: parse("prep_time", &config.prep_time)?,
                prep_time_unit: parse("prep_time_unit", &config.prep_time_unit)?,
                cook_time: parse("cook_time", &config.cook_time)?,
                cook_time_unit: parse("cook_time_unit", &config.cook_time_unit)?,
                total_time: parse("total_time", &config.total_time)?,
                summary: parse("summary", &config.summary)?,
                title: parse("title", &config.title)?,
            },
        })
    }
}

/// The built-in WPRM table.
///
/// # Panics
///
/// Only if a selector in [`SelectorConfig::default`] is not valid CSS; that
/// table is fixed and covered by `test_default_table_compiles`. Selector
/// tables from configuration go through [`SelectorSet::compile`] instead.
impl Default for SelectorSet {
    fn default() -> Self {
        Self::compile(&SelectorConfig::default()).expect("default selector table is valid CSS")
    }
}
