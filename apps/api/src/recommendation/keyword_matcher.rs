//! Keyword fallback — static matching of interest terms against the gift
//! taxonomy. Used whenever the completion API call faults.
//!
//! Algorithm:
//! 1. Lowercase the interests and split on whitespace.
//! 2. For each category (taxonomy order), for each token: the token matches
//!    when it is a substring of the category name or of any item name.
//!    A match contributes the category's first two items.
//! 3. Stop at `MAX_SUGGESTIONS`.
//! 4. Fill the remainder with random category/item picks (duplicates allowed).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::taxonomy::{GiftCategory, GiftTaxonomy};
use crate::recommendation::models::GiftSuggestion;

pub const MAX_SUGGESTIONS: usize = 5;

/// Items contributed by each matching (category, token) pair.
const ITEMS_PER_MATCH: usize = 2;

/// Lower bound of the synthesized price. Clamped down to the budget when the
/// budget is below it.
const MIN_PRICE: u64 = 20;

/// Returns exactly `MAX_SUGGESTIONS` suggestions for the given interests.
pub fn keyword_recommendations<R: Rng + ?Sized>(
    taxonomy: &GiftTaxonomy,
    interests: &str,
    budget: f64,
    rng: &mut R,
) -> Vec<GiftSuggestion> {
    let mut suggestions: Vec<GiftSuggestion> = match_interests(taxonomy, interests)
        .into_iter()
        .map(|(category, item)| GiftSuggestion {
            name: Some(item.to_string()),
            description: Some(format!(
                "A great {category} gift for someone who loves {interests}"
            )),
            price_range: Some(random_price(budget, rng)),
            reasoning: Some(format!(
                "This {category} item would be perfect for someone interested in {interests}"
            )),
        })
        .collect();

    let categories = taxonomy.categories();
    while suggestions.len() < MAX_SUGGESTIONS {
        let Some(entry) = categories.choose(rng) else {
            break;
        };
        let Some(item) = entry.items.choose(rng) else {
            continue;
        };
        let category = entry.category;
        suggestions.push(GiftSuggestion {
            name: Some(item.clone()),
            description: Some(format!("A thoughtful {category} gift")),
            price_range: Some(random_price(budget, rng)),
            reasoning: Some(format!(
                "This is a popular choice for {category} enthusiasts"
            )),
        });
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// The deterministic matching phase: up to `MAX_SUGGESTIONS` (category, item)
/// pairs in match order. A category matched by several tokens contributes its
/// items once per token.
pub fn match_interests<'a>(
    taxonomy: &'a GiftTaxonomy,
    interests: &str,
) -> Vec<(GiftCategory, &'a str)> {
    let lowered = interests.to_lowercase();
    let keywords: Vec<&str> = lowered.split_whitespace().collect();
    let mut matches = Vec::new();

    'categories: for entry in taxonomy.categories() {
        let category_name = entry.category.as_str();
        for keyword in &keywords {
            let hit = category_name.contains(keyword)
                || entry
                    .items
                    .iter()
                    .any(|item| item.to_lowercase().contains(keyword));
            if !hit {
                continue;
            }
            for item in entry.items.iter().take(ITEMS_PER_MATCH) {
                matches.push((entry.category, item.as_str()));
                if matches.len() >= MAX_SUGGESTIONS {
                    break 'categories;
                }
            }
        }
    }

    matches
}

/// `$N` with `N` uniform in `[20, floor(budget)]`, or exactly `floor(budget)`
/// when the budget is under 20. Budgets beyond `u64::MAX` saturate there.
fn random_price<R: Rng + ?Sized>(budget: f64, rng: &mut R) -> String {
    let ceiling = budget.floor() as u64;
    let floor = MIN_PRICE.min(ceiling);
    format!("${}", rng.gen_range(floor..=ceiling))
}
