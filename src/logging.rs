//! Инициализация логирования через tracing

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Переменная окружения с фильтром логов
pub const LOG_ENV: &str = "ZIP_EXTRACTOR_LOG";

/// Фильтр логов
///
/// Порядок: явный фильтр (флаг командной строки), переменная окружения,
/// `fallback` из настроек, `info`.
pub fn build_filter(explicit: Option<&str>, fallback: &str) -> EnvFilter {
    if let Some(filter) = explicit.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Установить глобальный subscriber
///
/// Повторный вызов ничего не делает (subscriber уже установлен).
pub fn init(explicit: Option<&str>, fallback: &str) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(explicit, fallback))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(None, "debug");
        init(Some("warn"), "info");
        tracing::info!("logging initialised");
    }

    #[test]
    fn test_build_filter_accepts_directives() {
        if std::env::var_os(LOG_ENV).is_none() {
            let filter = build_filter(None, "zip_extractor=debug");
            assert_eq!(filter.to_string(), "zip_extractor=debug");
        }
    }

    #[test]
    fn test_explicit_filter_wins() {
        // Что бы ни стояло в окружении, явный фильтр главнее
        let filter = build_filter(Some("debug"), "warn");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_invalid_explicit_filter_falls_back() {
        if std::env::var_os(LOG_ENV).is_none() {
            let filter = build_filter(Some("zip_extractor=loudest"), "warn");
            assert_eq!(filter.to_string(), "warn");
        }
    }
}
