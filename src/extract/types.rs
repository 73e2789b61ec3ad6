//! Типы для модуля распаковки

use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Сообщение об успешной распаковке
pub const EXTRACTION_SUCCESS: &str = "Extraction successful!";

/// Проверить расширение .zip (без учёта регистра)
pub fn is_zip(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".zip")
}

/// Запрос на распаковку
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub archive_path: PathBuf,
    pub destination_dir: PathBuf,
}

impl ExtractionRequest {
    /// Создать запрос, пустые пути - ошибка ввода
    pub fn new(archive_path: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let archive_path = archive_path.into();
        let destination_dir = destination_dir.into();

        if archive_path.as_os_str().is_empty() {
            return Err(AppError::invalid_input("no ZIP archive selected"));
        }
        if destination_dir.as_os_str().is_empty() {
            return Err(AppError::invalid_input("no output folder selected"));
        }

        Ok(Self {
            archive_path,
            destination_dir,
        })
    }

    /// Имя архива для лога и UI
    pub fn archive_name(&self) -> String {
        file_name_or_path(&self.archive_path)
    }
}

fn file_name_or_path(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Результат распаковки
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractResult {
    /// Всего записей (файлы и папки)
    pub entries: usize,
    pub files_count: usize,
    pub total_size: u64,
}

/// Сводка по архиву из центрального каталога
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub entries: usize,
    pub files: usize,
    pub dirs: usize,
    pub uncompressed_size: u64,
}
