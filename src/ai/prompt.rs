//! Prompt template for the AI scoring explanation

pub const PROMPT_NAME: &str = "aiScoringExplanationPrompt";

const PREAMBLE: &str = "You are an AI expert explaining the AI scoring feature in Secure 360.";

const INSTRUCTION: &str = "Explain how the AI scoring feature prioritizes security alerts and why it matters to a visitor of the Secure 360 landing page.";

/// Substitute the feature name into the fixed template
pub fn render(feature: &str) -> String {
    format!("{PREAMBLE}\n\nFeature: {feature}\n\n{INSTRUCTION}")
}
