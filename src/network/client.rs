//! HTTP клиент для загрузки файлов

use crate::error::AppResult;
use std::time::Duration;

/// User-Agent как у браузера - некоторые серверы отдают 403 "не браузерам"
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Таймаут соединения по умолчанию (секунды)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Максимум редиректов
const MAX_REDIRECTS: usize = 10;

/// Опции HTTP клиента
#[derive(Debug, Clone)]
pub struct TransferOptions {
    pub user_agent: String,
    /// Таймаут установки соединения; тело ответа таймаута не имеет
    pub connect_timeout: Option<Duration>,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Some(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
        }
    }
}

/// Собрать клиент reqwest из опций
pub fn build_client(options: &TransferOptions) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(options.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS));

    if let Some(timeout) = options.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }

    Ok(builder.build()?)
}
