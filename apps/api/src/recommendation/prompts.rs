// Prompt constants for the recommendation flow.

/// System instruction sent with every recommendation call.
pub const RECOMMENDATION_SYSTEM: &str = "You are a helpful gift recommendation assistant. \
    Provide thoughtful, personalized gift suggestions.";

/// Recommendation prompt template.
/// Replace: {recipient_info}, {budget}, {occasion}, {interests}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Suggest 5 personalized gift ideas for:
- Recipient: {recipient_info}
- Budget: ${budget}
- Occasion: {occasion}
- Interests: {interests}

For each suggestion, provide:
1. Gift name
2. Brief description
3. Estimated price range
4. Why it's perfect for this person

Format as JSON with fields: name, description, price_range, reasoning"#;
