//! Recommendation orchestration — one completion call, then a choice of
//! result source.
//!
//! Flow: render prompt → complete →
//!   Ok(text)  → decode JSON (list or single object) → else parse_suggestions
//!   Err(_)    → keyword_recommendations
//!
//! No retries: a single fault falls straight back to the keyword matcher.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::catalog::taxonomy::GiftTaxonomy;
use crate::llm_client::{strip_json_fences, CompletionClient};
use crate::recommendation::keyword_matcher::{keyword_recommendations, MAX_SUGGESTIONS};
use crate::recommendation::models::{GiftSuggestion, RecommendationRequest};
use crate::recommendation::prompts::{RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM};
use crate::recommendation::text_parser::parse_suggestions;

/// Which path produced the final suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    /// The model replied with valid JSON.
    Model,
    /// The model replied with prose, recovered by the line parser.
    ParsedText,
    /// The completion call faulted, or nothing usable came back.
    KeywordFallback,
}

#[derive(Debug, Clone)]
pub struct RecommendationOutcome {
    pub suggestions: Vec<GiftSuggestion>,
    pub source: RecommendationSource,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StructuredReply {
    Many(Vec<GiftSuggestion>),
    One(GiftSuggestion),
}

/// Produces between 1 and `MAX_SUGGESTIONS` suggestions for a validated
/// request. Never fails: every completion or decode fault degrades to a
/// local fallback.
pub async fn recommend_gifts(
    llm: &dyn CompletionClient,
    taxonomy: &GiftTaxonomy,
    request: &RecommendationRequest,
) -> RecommendationOutcome {
    let prompt = build_prompt(request);

    let reply = match llm.complete(&prompt, RECOMMENDATION_SYSTEM).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Completion API call failed, using keyword fallback: {e}");
            return keyword_fallback(taxonomy, request);
        }
    };

    let (mut suggestions, source) = match decode_structured(&reply) {
        Ok(suggestions) => (suggestions, RecommendationSource::Model),
        Err(e) => {
            debug!("Reply is not structured JSON ({e}), parsing as text");
            (parse_suggestions(&reply), RecommendationSource::ParsedText)
        }
    };

    if suggestions.is_empty() {
        info!("Model reply yielded no suggestions, using keyword fallback");
        return keyword_fallback(taxonomy, request);
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    info!(
        "Returning {} suggestions from {:?}",
        suggestions.len(),
        source
    );

    RecommendationOutcome {
        suggestions,
        source,
    }
}

/// Decodes a reply as a JSON list of suggestions or a single suggestion
/// object. Markdown code fences around the JSON are tolerated. Objects that
/// carry none of the suggestion fields are dropped.
pub fn decode_structured(reply: &str) -> Result<Vec<GiftSuggestion>, serde_json::Error> {
    let suggestions = match serde_json::from_str(strip_json_fences(reply))? {
        StructuredReply::Many(suggestions) => suggestions,
        StructuredReply::One(suggestion) => vec![suggestion],
    };
    Ok(suggestions.into_iter().filter(|s| !s.is_empty()).collect())
}

fn keyword_fallback(
    taxonomy: &GiftTaxonomy,
    request: &RecommendationRequest,
) -> RecommendationOutcome {
    let mut rng = rand::thread_rng();
    let suggestions =
        keyword_recommendations(taxonomy, &request.interests, request.budget, &mut rng);
    info!("Returning {} keyword fallback suggestions", suggestions.len());
    RecommendationOutcome {
        suggestions,
        source: RecommendationSource::KeywordFallback,
    }
}

fn build_prompt(request: &RecommendationRequest) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{recipient_info}", &request.recipient_info)
        .replace("{budget}", &request.budget.to_string())
        .replace("{occasion}", &request.occasion)
        .replace("{interests}", &request.interests)
}
