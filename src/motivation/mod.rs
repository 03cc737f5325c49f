//! Motivation client
//!
//! Builds short coaching prompts, sends them to a [`TextGenerator`], and always
//! hands back a displayable sentence. Generator failures are logged and replaced
//! by fixed fallback lines; callers never see an error.

mod fetcher;
mod gemini;

pub use fetcher::{MotivationFetcher, MotivationRequest, MotivationUpdate};
pub use gemini::{GeminiGenerator, DEFAULT_BASE_URL as GEMINI_BASE_URL};

use std::sync::Arc;

use tracing::{debug, warn};

/// Shown for the greeting while the first request is in flight
pub const GREETING_PLACEHOLDER: &str = "Carregando motivação...";

/// Shown on the coach card until a suggestion arrives
pub const SUGGESTION_PLACEHOLDER: &str = "Analisando seu ritmo...";

/// Fixed lines used instead of generated text
#[derive(Debug, Clone, Copy)]
pub struct Fallbacks {
    /// The service answered with nothing
    pub empty: &'static str,
    /// The call failed
    pub failed: &'static str,
}

pub const MOTIVATION_FALLBACKS: Fallbacks = Fallbacks {
    empty: "Bora treinar esse bonequinho!",
    failed: "O progresso não para! Vamos pra cima!",
};

pub const SUGGESTION_FALLBACKS: Fallbacks = Fallbacks {
    empty: "Que tal um treino de pernas hoje?",
    failed: "Bora fazer um cárdio hoje?",
};

/// Error from a text-generation backend
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// A single-shot text completion backend
pub trait TextGenerator: Send + Sync {
    /// Complete `prompt` with `model`. One attempt, no retries.
    fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError>;
}

/// Prompt builder and error absorber in front of a [`TextGenerator`]
#[derive(Clone)]
pub struct MotivationClient {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl MotivationClient {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// A short, playful pep talk for `name`
    pub fn workout_motivation(&self, name: &str, level: u32, last_workout_type: &str) -> String {
        self.complete(&motivation_prompt(name, level, last_workout_type), MOTIVATION_FALLBACKS)
    }

    /// A one-sentence suggestion for the next workout, given a summary of past ones
    pub fn suggest_next_workout(&self, history: &str) -> String {
        self.complete(&suggestion_prompt(history), SUGGESTION_FALLBACKS)
    }

    fn complete(&self, prompt: &str, fallbacks: Fallbacks) -> String {
        debug!("Requesting completion from {}", self.model);
        match self.generator.generate(&self.model, prompt) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    fallbacks.empty.to_string()
                } else {
                    text.to_string()
                }
            }
            Err(e) => {
                warn!("Text generation failed: {}", e);
                fallbacks.failed.to_string()
            }
        }
    }
}

pub fn motivation_prompt(name: &str, level: u32, last_workout_type: &str) -> String {
    format!(
        "O usuário {name} está no nível {level} e seu último treino foi {last_workout_type}.\n\
         Dê uma frase de motivação curta e divertida em português, como se fosse um personal \
         trainer que cuida de um avatar virtual (bonequinho de RPG).\n\
         Use no máximo 20 palavras."
    )
}

pub fn suggestion_prompt(history: &str) -> String {
    format!(
        "Com base nos treinos: {history}. Sugira um próximo treino curto (1 frase) focado em \
         equilibrar o corpo."
    )
}
