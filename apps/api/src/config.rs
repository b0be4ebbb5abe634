use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Nothing is required; AI endpoints are disabled without `GEMINI_API_KEY`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub cors_permissive: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            gemini_api_key: lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()),
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            cors_permissive: match lookup("CORS_PERMISSIVE") {
                Some(v) => parse_bool(&v)
                    .with_context(|| format!("CORS_PERMISSIVE must be true or false, got '{v}'"))?,
                None => true,
            },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config_from(&[]).unwrap();
        assert_eq!(c.port, 8080);
        assert_eq!(c.rust_log, "info");
        assert!(c.gemini_api_key.is_none());
        assert_eq!(c.gemini_model, DEFAULT_MODEL);
        assert!(c.cors_permissive);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
    }

    #[test]
    fn test_blank_api_key_reads_as_unset() {
        let c = config_from(&[("GEMINI_API_KEY", "  ")]).unwrap();
        assert!(c.gemini_api_key.is_none());
    }

    #[test]
    fn test_cors_flag() {
        assert!(!config_from(&[("CORS_PERMISSIVE", "false")]).unwrap().cors_permissive);
        assert!(config_from(&[("CORS_PERMISSIVE", "maybe")]).is_err());
    }
}
