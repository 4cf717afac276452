use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![10, 20, 50, 100],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    pub filter: String,
    /// Optional log file, relative paths resolve next to the executable
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Reject values the list pages cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.list.default_page_size == 0 {
            anyhow::bail!("list.default_page_size must be at least 1");
        }
        if self.list.page_size_options.contains(&0) {
            anyhow::bail!("list.page_size_options must not contain 0");
        }
        Ok(())
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[list]
default_page_size = 10
page_size_options = [10, 20, 50, 100]

[logging]
filter = "info"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.list.default_page_size, 10);
        assert_eq!(config.list.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(config.logging.filter, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[logging]\nfilter = \"debug\"\n").unwrap();
        assert_eq!(config.list.default_page_size, 10);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let result = parse_config("[list]\ndefault_page_size = 0\npage_size_options = [10]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("console-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[list]\ndefault_page_size = 20\npage_size_options = [20, 40]\n\n[logging]\nfilter = \"warn\"\nfile = \"logs/console.log\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.list.default_page_size, 20);
        assert_eq!(config.logging.file.as_deref(), Some("logs/console.log"));
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(load_config_from(Path::new("/nonexistent/config.toml")).is_err());
    }
}
