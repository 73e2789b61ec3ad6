//! Ошибки операций распаковки и загрузки

use std::error::Error as StdError;
use thiserror::Error;

/// Результат операций библиотеки
pub type AppResult<T> = Result<T, AppError>;

/// Ошибка операции
#[derive(Debug, Error)]
pub enum AppError {
    /// Не указан URL, папка или архив
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Сервер ответил статусом >= 400
    #[error("Failed to download file: HTTP {status}")]
    Http { status: u16 },

    /// Ошибка соединения (DNS, обрыв и т.п.)
    #[error("Download error: {0}")]
    Transport(String),

    /// Повреждённый архив, небезопасный путь, ошибка записи
    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Операция отменена пользователем
    #[error("Operation cancelled")]
    Cancelled,

    /// Задача упала или была снята рантаймом
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        AppError::InvalidInput(message.into())
    }

    pub fn extraction<S: Into<String>>(message: S) -> Self {
        AppError::Extraction(message.into())
    }

    /// Ошибка загрузки (HTTP статус или транспорт)
    pub fn is_transfer(&self) -> bool {
        matches!(self, AppError::Http { .. } | AppError::Transport(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }

    /// HTTP статус, если ошибка им вызвана
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::Extraction(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(error_chain(&err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_cancelled() {
            AppError::Cancelled
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

/// Сообщение ошибки вместе со всей цепочкой причин
///
/// reqwest прячет причину (например, DNS) в `source()`, а в `Display`
/// оставляет только "error sending request".
pub fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_contains_status() {
        let err = AppError::Http { status: 404 };
        assert!(err.to_string().contains("404"));
        assert_eq!(err.status(), Some(404));
        assert!(err.is_transfer());
    }

    #[test]
    fn test_transport_is_transfer() {
        assert!(AppError::Transport("reset".to_string()).is_transfer());
        assert!(!AppError::extraction("bad").is_transfer());
        assert!(!AppError::Cancelled.is_transfer());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "dns failure");
        let outer = std::io::Error::new(std::io::ErrorKind::Other, inner);
        let message = error_chain(&outer);
        assert!(message.contains("dns failure"));
    }

    #[test]
    fn test_cancelled() {
        assert!(AppError::Cancelled.is_cancelled());
        assert_eq!(AppError::Cancelled.status(), None);
    }
}
