// Gift recommendation: completion call with JSON decode, text-parse and
// keyword fallbacks. All completion calls go through llm_client.

pub mod handlers;
pub mod keyword_matcher;
pub mod models;
pub mod orchestrator;
pub mod prompts;
pub mod text_parser;
