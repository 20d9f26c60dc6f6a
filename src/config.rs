use std::{str::FromStr, time::Duration};

use thiserror::Error;

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub chat: ChatConfig,
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            tick_rate: Duration::from_millis(33),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY"));
        let endpoint = get("NOVACARE_CHAT_ENDPOINT")
            .map(|e| e.trim_end_matches('/').to_string())
            .unwrap_or(defaults.chat.endpoint);
        let model = get("NOVACARE_CHAT_MODEL").unwrap_or(defaults.chat.model);

        let temperature = parse(&get, "NOVACARE_CHAT_TEMPERATURE")?
            .unwrap_or(defaults.chat.temperature);
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::Invalid {
                key: "NOVACARE_CHAT_TEMPERATURE",
                value: temperature.to_string(),
            });
        }

        let timeout = parse::<u64, _>(&get, "NOVACARE_CHAT_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.chat.timeout);
        let tick_rate = parse::<u64, _>(&get, "NOVACARE_TICK_MS")?
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_rate);

        Ok(Self {
            chat: ChatConfig {
                api_key,
                endpoint,
                model,
                temperature,
                timeout,
            },
            tick_rate,
        })
    }
}

fn parse<T, G>(get: &G, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();
        assert_eq!(config.chat.api_key, None);
        assert_eq!(config.chat.model, DEFAULT_CHAT_MODEL);
        assert_eq!(config.chat.endpoint, DEFAULT_CHAT_ENDPOINT);
        assert_eq!(config.chat.temperature, 0.7);
        assert_eq!(config.tick_rate, Duration::from_millis(33));
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("API_KEY", "fallback"),
            ("NOVACARE_CHAT_ENDPOINT", "http://localhost:8080/"),
            ("NOVACARE_CHAT_MODEL", "gemini-test"),
            ("NOVACARE_CHAT_TEMPERATURE", "0.2"),
            ("NOVACARE_CHAT_TIMEOUT_SECS", "5"),
            ("NOVACARE_TICK_MS", "100"),
        ])
        .unwrap();

        assert_eq!(config.chat.api_key.as_deref(), Some("fallback"));
        assert_eq!(config.chat.endpoint, "http://localhost:8080");
        assert_eq!(config.chat.model, "gemini-test");
        assert_eq!(config.chat.temperature, 0.2);
        assert_eq!(config.chat.timeout, Duration::from_secs(5));
        assert_eq!(config.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn gemini_key_wins_over_generic_key() {
        let config = config(&[("API_KEY", "generic"), ("GEMINI_API_KEY", "gemini")]).unwrap();
        assert_eq!(config.chat.api_key.as_deref(), Some("gemini"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config(&[("GEMINI_API_KEY", "  "), ("NOVACARE_CHAT_MODEL", "")]).unwrap();
        assert_eq!(config.chat.api_key, None);
        assert_eq!(config.chat.model, DEFAULT_CHAT_MODEL);
    }

    #[test]
    fn rejects_invalid_numbers() {
        assert_eq!(
            config(&[("NOVACARE_CHAT_TIMEOUT_SECS", "soon")]).unwrap_err(),
            ConfigError::Invalid {
                key: "NOVACARE_CHAT_TIMEOUT_SECS",
                value: "soon".to_string(),
            }
        );
        assert!(config(&[("NOVACARE_CHAT_TEMPERATURE", "5.0")]).is_err());
    }
}
