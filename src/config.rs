use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub journal: JournalConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JournalConfig {
    /// Folder whose direct children are the dated journal entries.
    pub path: PathBuf,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_date_prefix_len")]
    pub date_prefix_len: usize,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_date_prefix_len() -> usize {
    10
}
fn default_include_globs() -> Vec<String> {
    vec!["*.md".to_string(), "*.txt".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "llama3.2:latest".to_string()
}

impl Config {
    /// Defaults for everything except the journal folder. Used when the
    /// folder is given on the command line and no config file exists.
    pub fn minimal(journal_path: impl Into<PathBuf>) -> Self {
        Self {
            journal: JournalConfig {
                path: journal_path.into(),
                date_format: default_date_format(),
                date_prefix_len: default_date_prefix_len(),
                include_globs: default_include_globs(),
            },
            chat: ChatConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;

    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    if config.journal.path.as_os_str().is_empty() {
        anyhow::bail!("journal.path must not be empty");
    }

    if config.journal.date_prefix_len == 0 {
        anyhow::bail!("journal.date_prefix_len must be > 0");
    }

    // Probe the format: it has to render a date and read it back.
    let probe = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap_or_default();
    let mut rendered = String::new();
    if write!(rendered, "{}", probe.format(&config.journal.date_format)).is_err() {
        anyhow::bail!(
            "journal.date_format '{}' is not a valid date format",
            config.journal.date_format
        );
    }
    match NaiveDate::parse_from_str(&rendered, &config.journal.date_format) {
        Ok(parsed) if parsed == probe => {}
        _ => anyhow::bail!(
            "journal.date_format '{}' must contain a full year, month, and day",
            config.journal.date_format
        ),
    }

    if config.chat.model.trim().is_empty() {
        anyhow::bail!("chat.model must not be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("jctx.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults_applied() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[journal]\npath = \"/vault/Journal\"\n");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.journal.path, PathBuf::from("/vault/Journal"));
        assert_eq!(cfg.journal.date_format, "%Y-%m-%d");
        assert_eq!(cfg.journal.date_prefix_len, 10);
        assert_eq!(cfg.journal.include_globs, vec!["*.md", "*.txt"]);
        assert_eq!(cfg.chat.model, "llama3.2:latest");
    }

    #[test]
    fn test_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"[journal]
path = "notes"
date_format = "%d.%m.%Y"
date_prefix_len = 10
include_globs = ["*.org"]

[chat]
model = "mistral:7b"
"#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.journal.date_format, "%d.%m.%Y");
        assert_eq!(cfg.journal.include_globs, vec!["*.org"]);
        assert_eq!(cfg.chat.model, "mistral:7b");
    }

    #[test]
    fn test_missing_journal_section_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[chat]\nmodel = \"x\"\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_zero_prefix_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[journal]\npath = \"j\"\ndate_prefix_len = 0\n");
        let err = load_config(&path).unwrap_err().to_string();
        assert!(err.contains("date_prefix_len"), "{}", err);
    }

    #[test]
    fn test_incomplete_date_format_rejected() {
        let mut cfg = Config::minimal("j");
        cfg.journal.date_format = "%Y-%m".to_string();
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut cfg = Config::minimal("j");
        cfg.chat.model = "  ".to_string();
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/jctx.toml"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("/nonexistent/jctx.toml"));
    }
}
