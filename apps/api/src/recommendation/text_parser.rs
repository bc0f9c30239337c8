//! Line-oriented parser for model replies that are not valid JSON.
//!
//! Recognizes a numbered list (`1.` to `5.`) where each entry's name follows
//! the marker, and labelled lines such as `Description: ...`, `Price: ...`,
//! `Why: ...` that fill in the current entry. Output length follows the
//! text's structure; nothing is padded or capped here.

use crate::recommendation::models::GiftSuggestion;

const LIST_MARKERS: [&str; 5] = ["1.", "2.", "3.", "4.", "5."];

enum Field {
    Description,
    PriceRange,
    Reasoning,
}

/// Extracts suggestion records from free-form text, in order of appearance.
pub fn parse_suggestions(text: &str) -> Vec<GiftSuggestion> {
    let mut suggestions = Vec::new();
    let mut current = GiftSuggestion::default();

    for line in text.lines().map(str::trim) {
        if LIST_MARKERS.iter().any(|m| line.starts_with(m)) {
            let finished = std::mem::take(&mut current);
            if !finished.is_empty() {
                suggestions.push(finished);
            }
            let name = line.split_once('.').map_or(line, |(_, rest)| rest).trim();
            current.name = Some(name.to_string());
            continue;
        }

        let Some(field) = classify(line) else {
            continue;
        };
        let value = line
            .split_once(':')
            .map_or(line, |(_, rest)| rest.trim())
            .to_string();
        match field {
            Field::Description => current.description = Some(value),
            Field::PriceRange => current.price_range = Some(value),
            Field::Reasoning => current.reasoning = Some(value),
        }
    }

    if !current.is_empty() {
        suggestions.push(current);
    }

    suggestions
}

/// First matching label wins: description, then price, then why/reasoning.
fn classify(line: &str) -> Option<Field> {
    let lowered = line.to_lowercase();
    if lowered.contains("description") {
        Some(Field::Description)
    } else if lowered.contains("price") {
        Some(Field::PriceRange)
    } else if lowered.contains("why") || lowered.contains("reasoning") {
        Some(Field::Reasoning)
    } else {
        None
    }
}
