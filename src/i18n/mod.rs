//! Модуль интернационализации (i18n)
//!
//! Поддерживаемые языки: английский, русский, украинский

mod translations;

use serde::{Deserialize, Serialize};

/// Поддерживаемые языки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Russian,
    Ukrainian,
}

impl Language {
    /// Название языка на этом языке
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Русский",
            Language::Ukrainian => "Українська",
        }
    }

    /// Флаг/эмодзи для языка
    pub fn flag(&self) -> &'static str {
        match self {
            Language::English => "🇬🇧",
            Language::Russian => "🇷🇺",
            Language::Ukrainian => "🇺🇦",
        }
    }

    /// Все доступные языки
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Russian, Language::Ukrainian]
    }
}

/// Структура с переводами всех строк интерфейса
#[derive(Debug, Clone)]
pub struct Translations {
    // === Главное меню ===
    pub app_title: &'static str,
    pub mode_label: &'static str,
    pub mode_extract: &'static str,
    pub mode_download: &'static str,

    // === Распаковка ===
    pub extract_title: &'static str,
    pub archive_path: &'static str,
    pub no_archive_selected: &'static str,
    pub select_archive: &'static str,
    pub extract_destination: &'static str,
    pub select_folder: &'static str,
    pub choose: &'static str,
    pub extract_zip: &'static str,
    pub archive_entries: &'static str,
    pub archive_files: &'static str,
    pub archive_dirs: &'static str,
    pub archive_size: &'static str,

    // === Загрузка ===
    pub download_title: &'static str,
    pub url: &'static str,
    pub url_hint: &'static str,
    pub download_folder: &'static str,
    pub download: &'static str,

    // === Окно прогресса ===
    pub extracting: &'static str,
    pub downloading: &'static str,
    pub cancel: &'static str,
    pub cancelling: &'static str,

    // === Общее ===
    pub status: &'static str,
    pub log: &'static str,
    pub clear: &'static str,
    pub log_empty: &'static str,
    pub ready: &'static str,
    pub error: &'static str,
    pub extraction_completed: &'static str,
    pub download_completed: &'static str,
    pub operation_cancelled: &'static str,
    pub no_archive: &'static str,
    pub no_url: &'static str,
    pub no_folder: &'static str,
}

impl Translations {
    /// Получить переводы для указанного языка
    pub fn for_language(lang: Language) -> &'static Translations {
        match lang {
            Language::English => &translations::EN,
            Language::Russian => &translations::RU,
            Language::Ukrainian => &translations::UK,
        }
    }
}

/// Глобальный доступ к текущему языку (для удобства)
pub fn t(lang: Language) -> &'static Translations {
    Translations::for_language(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(t(Language::default()).select_archive, "Select ZIP File");
    }

    #[test]
    fn test_all_tables_filled() {
        for lang in Language::all() {
            let tr = t(*lang);
            assert!(!tr.app_title.is_empty());
            assert!(!tr.cancel.is_empty());
            assert!(!tr.select_folder.is_empty());
        }
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Language::Ukrainian).unwrap();
        assert_eq!(json, "\"ukrainian\"");
        let lang: Language = serde_json::from_str("\"russian\"").unwrap();
        assert_eq!(lang, Language::Russian);
    }
}
