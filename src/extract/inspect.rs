//! Чтение центрального каталога ZIP без распаковки

use super::types::ArchiveSummary;
use crate::error::AppResult;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

fn open_archive(archive_path: &Path) -> AppResult<zip::ZipArchive<BufReader<File>>> {
    // Нечитаемый файл - ошибка ввода-вывода, а не распаковки
    let file = File::open(archive_path)?;
    Ok(zip::ZipArchive::new(BufReader::new(file))?)
}

/// Количество записей в архиве - знаменатель для процентов распаковки
pub fn count_entries(archive_path: &Path) -> AppResult<usize> {
    let archive = open_archive(archive_path)?;
    debug!(archive = %archive_path.display(), entries = archive.len(), "central directory read");
    Ok(archive.len())
}

/// Сводка по архиву: записи, файлы, папки, размер после распаковки
pub fn inspect(archive_path: &Path) -> AppResult<ArchiveSummary> {
    let mut archive = open_archive(archive_path)?;
    let mut summary = ArchiveSummary {
        entries: archive.len(),
        ..Default::default()
    };

    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i)?;
        if entry.is_dir() {
            summary.dirs += 1;
        } else {
            summary.files += 1;
            summary.uncompressed_size += entry.size();
        }
    }

    Ok(summary)
}
