use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// A single gift idea. Every field is best-effort: a field the source did not
/// provide stays `None` and is omitted from the JSON output.
///
/// Model replies sometimes carry numbers (`"price_range": 50`) where text is
/// expected, so fields accept any JSON value: strings as-is, anything else as
/// its JSON text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GiftSuggestion {
    #[serde(
        default,
        deserialize_with = "value_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "value_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "value_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_range: Option<String>,
    #[serde(
        default,
        deserialize_with = "value_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub reasoning: Option<String>,
}

fn value_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Ok(Some(other.to_string())),
    }
}

impl GiftSuggestion {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price_range.is_none()
            && self.reasoning.is_none()
    }
}

fn default_budget() -> f64 {
    100.0
}

fn default_occasion() -> String {
    "General".to_string()
}

/// Request body for `POST /api/recommendations`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub recipient_info: String,
    #[serde(default = "default_budget")]
    pub budget: f64,
    #[serde(default = "default_occasion")]
    pub occasion: String,
    #[serde(default)]
    pub interests: String,
}

impl RecommendationRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        // Whitespace-only values count as missing.
        if self.recipient_info.trim().is_empty() || self.interests.trim().is_empty() {
            return Err(AppError::Validation(
                "Recipient info and interests are required".to_string(),
            ));
        }
        if self.budget.is_nan() || self.budget <= 0.0 {
            return Err(AppError::Validation("Budget must be positive".to_string()));
        }
        Ok(())
    }
}

/// Response body for a successful recommendation request.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub recommendations: Vec<GiftSuggestion>,
    pub total_found: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(recipient_info: &str, budget: f64, interests: &str) -> RecommendationRequest {
        RecommendationRequest {
            recipient_info: recipient_info.to_string(),
            budget,
            occasion: default_occasion(),
            interests: interests.to_string(),
        }
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let req: RecommendationRequest =
            serde_json::from_str(r#"{"recipient_info": "My sister", "interests": "yoga"}"#)
                .unwrap();
        assert_eq!(req.budget, 100.0);
        assert_eq!(req.occasion, "General");
    }

    #[test]
    fn test_absent_strings_fail_validation() {
        let req: RecommendationRequest = serde_json::from_str(r#"{"budget": 50}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_interests_fail_validation() {
        assert!(request("Dad", 50.0, "   ").validate().is_err());
        assert!(request("", 50.0, "golf").validate().is_err());
    }

    #[test]
    fn test_non_positive_budget_fails_validation() {
        let err = request("Dad", 0.0, "golf").validate().unwrap_err();
        assert_eq!(err.to_string(), "Budget must be positive");
        assert!(request("Dad", -10.0, "golf").validate().is_err());
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("Dad", 0.5, "golf").validate().is_ok());
    }

    #[test]
    fn test_suggestion_accepts_numeric_fields() {
        let suggestion: GiftSuggestion =
            serde_json::from_str(r#"{"name": "Camera", "price_range": 250, "reasoning": null}"#)
                .unwrap();
        assert_eq!(suggestion.price_range.as_deref(), Some("250"));
        assert!(suggestion.reasoning.is_none());
        assert!(suggestion.description.is_none());
    }

    #[test]
    fn test_suggestion_keeps_nested_fields_as_json_text() {
        let suggestion: GiftSuggestion = serde_json::from_str(
            r#"{"name": "Yoga Mat", "price_range": {"min": 20, "max": 40}, "reasoning": ["calm", "fit"]}"#,
        )
        .unwrap();
        assert_eq!(suggestion.name.as_deref(), Some("Yoga Mat"));
        let price = suggestion.price_range.as_deref().unwrap();
        assert!(price.contains(r#""min":20"#) && price.contains(r#""max":40"#));
        assert_eq!(suggestion.reasoning.as_deref(), Some(r#"["calm","fit"]"#));
    }

    #[test]
    fn test_suggestion_omits_absent_fields() {
        let suggestion = GiftSuggestion {
            name: Some("Yoga Mat".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Yoga Mat" }));
    }
}
