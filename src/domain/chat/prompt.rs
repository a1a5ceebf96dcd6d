//! Fixed texts and completion parameters of the construction assistant.

/// System instruction prepended to every completion request.
pub const CONSTRUCTION_SYSTEM_PROMPT: &str = "\
You are an expert AI construction assistant specializing in:
- Construction materials and their properties
- Material quantity calculations and estimations
- Construction project planning and scheduling
- Supplier recommendations and material sourcing
- Construction best practices and safety guidelines
- Weather impact on construction activities
- Cost estimation and budget planning
- Building codes and regulations
- Equipment and tool recommendations

Provide practical, accurate, and helpful advice. Keep responses concise but informative.
When discussing quantities or calculations, always ask for project specifics if not provided.
Prioritize safety in all recommendations.

Format your responses in a friendly, professional manner suitable for construction professionals.";

/// Reply used when the provider answers without usable text.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I couldn't generate a response. Please try again.";

/// First message of every conversation.
pub const GREETING: &str = "\
Hello! I'm your AI construction assistant. I can help you with:

• Material calculations and estimations
• Project planning and scheduling
• Supplier recommendations
• Construction best practices
• Safety guidelines
• Cost estimation
• Weather impact analysis

How can I assist you with your construction project today?";

pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Completion parameters shared by every relay call.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionSettings {
    pub fn new(system_prompt: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            max_tokens,
            temperature,
        }
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self::new(
            CONSTRUCTION_SYSTEM_PROMPT,
            DEFAULT_MAX_TOKENS,
            DEFAULT_TEMPERATURE,
        )
    }
}
