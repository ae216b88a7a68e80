use crate::extractors::text::extract_row_text;
use crate::model::InstructionStep;
use crate::selectors::InstructionSelectors;
use scraper::Html;

/// Instruction steps numbered from zero across every instruction group.
pub fn scrape_instructions(document: &Html, selectors: &InstructionSelectors) -> Vec<InstructionStep> {
    document
        .select(&selectors.row)
        .enumerate()
        .map(|(number, row)| InstructionStep {
            text: extract_row_text(row, &selectors.text),
            number,
        })
        .collect()
}
