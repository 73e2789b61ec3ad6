//! Настройки приложения - сохранение и загрузка

use crate::i18n::Language;
use crate::network::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_USER_AGENT, TransferOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Фильтр логов по умолчанию
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Настройки, сохраняемые между запусками
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Язык интерфейса
    pub language: Language,
    /// Папка для загрузок по умолчанию
    pub download_dir: PathBuf,
    /// Последняя выбранная папка распаковки
    pub last_output_dir: Option<PathBuf>,
    pub user_agent: String,
    /// 0 = без таймаута
    pub connect_timeout_secs: u64,
    /// Фильтр tracing (перекрывается переменной окружения)
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            download_dir: default_download_dir(),
            last_output_dir: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Загрузить настройки из файла (при любой ошибке - значения по умолчанию)
    pub fn load() -> Self {
        Self::load_from(&settings_file_path())
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    debug!(path = %path.display(), "settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "settings file is invalid, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Сохранить настройки в файл
    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(&settings_file_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        // Создаём директорию если нужно
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Опции HTTP клиента
    pub fn transfer_options(&self) -> TransferOptions {
        let user_agent = if self.user_agent.trim().is_empty() {
            DEFAULT_USER_AGENT.to_string()
        } else {
            self.user_agent.clone()
        };

        TransferOptions {
            user_agent,
            connect_timeout: (self.connect_timeout_secs > 0)
                .then(|| Duration::from_secs(self.connect_timeout_secs)),
        }
    }
}

/// Папка загрузок ОС или текущая
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Путь к файлу настроек
fn settings_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zip_extractor")
        .join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.user_agent, "Mozilla/5.0");
        assert_eq!(settings.connect_timeout_secs, 30);
        assert_eq!(settings.log_filter, "info");
        assert!(settings.last_output_dir.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            language: Language::Ukrainian,
            last_output_dir: Some(PathBuf::from("/tmp/out")),
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = Settings::load_from(&dir.path().join("none.json"));
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "user_agent": "custom/1.0" }"#).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.user_agent, "custom/1.0");
        assert_eq!(loaded.connect_timeout_secs, 30);
    }

    #[test]
    fn test_transfer_options() {
        let mut settings = Settings::default();
        settings.connect_timeout_secs = 0;
        settings.user_agent = "  ".to_string();

        let options = settings.transfer_options();
        assert!(options.connect_timeout.is_none());
        assert_eq!(options.user_agent, "Mozilla/5.0");
    }
}
