/// Base URL of the generative-language API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Where users can create a Gemini key.
pub const GEMINI_KEY_URL: &str = "https://aistudio.google.com/app/apikey";

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 5000;

pub const APP_NAME: &str = "ScholarSide";

/// Fixed parameters for every generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub model: &'static str,
    pub preamble: &'static str,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro",
            preamble: "You are a helpful AI study assistant. Please provide a clear, educational response to this question: ",
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

impl GeminiConfig {
    pub fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            GeminiConfig::default().endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }
}
