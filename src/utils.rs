//! Вспомогательные утилиты

use std::path::{Path, PathBuf};

/// Обрезает строку до max_chars символов (не байт), оставляя конец пути
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let skip = char_count.saturating_sub(max_chars.saturating_sub(3));
        format!("...{}", s.chars().skip(skip).collect::<String>())
    }
}

/// Размер в человекочитаемом виде
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    match size {
        s if s >= GB => format!("{:.2} GB", s as f64 / GB as f64),
        s if s >= MB => format!("{:.2} MB", s as f64 / MB as f64),
        s if s >= KB => format!("{:.2} KB", s as f64 / KB as f64),
        s => format!("{s} B"),
    }
}

/// Папка распаковки по умолчанию: `<папка архива>/<имя архива без .zip>`
pub fn default_output_dir(archive: &Path) -> PathBuf {
    let stem = archive
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "extracted".to_string());

    archive
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(stem)
}
