use std::env;
use std::fmt;

use crate::genai::gemini::GEMINI_API_BASE;

/// Topic used when the caller supplies none.
pub const DEFAULT_TOPIC: &str =
    "200 words about machine learning and provide a few links on the web for further research";

/// Application configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub default_topic: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            log_level: env::var("RUST_LOG")
                .unwrap_or_else(|_| "rs_explain_svc=info,tower_http=debug".to_string()),
            google_api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| GEMINI_API_BASE.to_string()),
            default_topic: env::var("DEFAULT_TOPIC")
                .unwrap_or_else(|_| DEFAULT_TOPIC.to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

// Manual Debug so the startup log never carries the API key.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field(
                "google_api_key",
                if self.google_api_key.is_empty() {
                    &"<unset>"
                } else {
                    &"<redacted>"
                },
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_base", &self.gemini_api_base)
            .field("default_topic", &self.default_topic)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_api_key() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            google_api_key: "super-secret".to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_api_base: GEMINI_API_BASE.to_string(),
            default_topic: DEFAULT_TOPIC.to_string(),
        };

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
