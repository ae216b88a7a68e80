use serde::Serialize;

/// One ingredient line. An empty `amount` usually marks an optional ingredient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstructionStep {
    #[serde(rename = "instruction")]
    pub text: String,
    /// Zero-based position across all instruction groups
    pub number: usize,
}

/// One nutrition label row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NutritionFact {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

/// Scalar recipe fields. Fields whose selector matches nothing are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMetadata {
    pub servings: String,
    pub servings_unit: String,
    pub cuisine: String,
    pub course: String,
    pub author: String,
    pub prep_time: String,
    pub prep_time_unit: String,
    pub cook_time: String,
    pub cook_time_unit: String,
    pub total_time: String,
    pub summary: String,
    pub title: String,
}

/// Everything scraped from one recipe page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipe {
    #[serde(rename = "Metadata")]
    pub metadata: RecipeMetadata,
    #[serde(rename = "Nutrition")]
    pub nutrition: Vec<NutritionFact>,
    #[serde(rename = "Instruction")]
    pub instructions: Vec<InstructionStep>,
    #[serde(rename = "Ingredient")]
    pub ingredients: Vec<Ingredient>,
}
