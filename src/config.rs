use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::quiz::navigation::AutoAdvanceMode;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_auto_next")]
    pub auto_next: bool,
    #[serde(default = "default_auto_advance_delay_ms")]
    pub auto_advance_delay_ms: u64,
    #[serde(default)]
    pub shuffle_mode: AutoAdvanceMode,
    #[serde(default)]
    pub questions_path: Option<String>,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_auto_next() -> bool {
    true
}
fn default_auto_advance_delay_ms() -> u64 {
    200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            auto_next: default_auto_next(),
            auto_advance_delay_ms: default_auto_advance_delay_ms(),
            shuffle_mode: AutoAdvanceMode::default(),
            questions_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quizr")
            .join("config.toml")
    }

    pub fn auto_advance_delay(&self) -> Duration {
        Duration::from_millis(self.auto_advance_delay_ms)
    }

    /// Question bank path: explicit argument, then config, then `questions.json`.
    pub fn resolve_questions_path(&self, cli_path: Option<PathBuf>) -> PathBuf {
        cli_path
            .or_else(|| self.questions_path.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("questions.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert!(config.auto_next);
        assert_eq!(config.auto_advance_delay_ms, 200);
        assert_eq!(config.shuffle_mode, AutoAdvanceMode::Off);
        assert!(config.questions_path.is_none());
    }

    #[test]
    fn test_config_partial_file_keeps_defaults() {
        let toml_str = r#"
auto_next = false
shuffle_mode = "shuffle-questions"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(!config.auto_next);
        assert_eq!(config.shuffle_mode, AutoAdvanceMode::ShuffleQuestions);
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.auto_advance_delay(), Duration::from_millis(200));
    }

    #[test]
    fn test_config_unknown_mode_rejected() {
        assert!(toml::from_str::<Config>("shuffle_mode = \"sideways\"").is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.questions_path = Some("/tmp/bank.json".to_string());
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.questions_path, config.questions_path);
        assert_eq!(deserialized.auto_advance_delay_ms, config.auto_advance_delay_ms);
    }

    #[test]
    fn test_questions_path_precedence() {
        let mut config = Config::default();
        assert_eq!(
            config.resolve_questions_path(None),
            PathBuf::from("questions.json")
        );
        config.questions_path = Some("bank.json".to_string());
        assert_eq!(config.resolve_questions_path(None), PathBuf::from("bank.json"));
        assert_eq!(
            config.resolve_questions_path(Some(PathBuf::from("cli.json"))),
            PathBuf::from("cli.json")
        );
    }
}
