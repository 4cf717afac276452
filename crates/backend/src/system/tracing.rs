use crate::shared::config::LoggingConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация системы трассировки (tracing)
///
/// Логи пишутся в:
/// - stdout (с цветами)
/// - `logging.file`, если задан (без цветов)
///
/// `RUST_LOG` перекрывает фильтр из конфига. Повторный вызов после
/// установки subscriber ничего не делает.
pub fn initialize(config: &LoggingConfig) -> anyhow::Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter.clone());

    let file_layer = match &config.file {
        Some(file) => {
            let log_file_path = resolve_log_path(file);
            if let Some(log_dir) = log_file_path.parent() {
                std::fs::create_dir_all(log_dir).map_err(|e| {
                    anyhow::anyhow!("Cannot create log directory {}: {}", log_dir.display(), e)
                })?;
            }
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file_path)
                .map_err(|e| {
                    anyhow::anyhow!("Cannot open log file {}: {}", log_file_path.display(), e)
                })?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Arc::new(log_file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    let installed = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_level))
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Tracing initialized, level: {}", log_level);
    }

    Ok(())
}

/// Относительные пути считаются от директории исполняемого файла
fn resolve_log_path(file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_twice() {
        let config = LoggingConfig::default();
        assert!(initialize(&config).is_ok());
        assert!(initialize(&config).is_ok());
    }

    #[test]
    fn test_absolute_log_path_is_kept() {
        let path = std::env::temp_dir().join("console.log");
        let resolved = resolve_log_path(path.to_str().unwrap());
        assert_eq!(resolved, path);
    }
}
