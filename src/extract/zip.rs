//! Распаковка ZIP архивов с прогрессом по записям

use super::inspect::count_entries;
use super::types::ExtractResult;
use crate::error::{AppError, AppResult};
use crate::progress::{ProgressSink, ProgressTracker, StopFlag, entry_percent};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Распаковать ZIP архив
///
/// Знаменатель процентов берётся из центрального каталога.
pub fn extract_zip(
    archive_path: &Path,
    output_dir: &Path,
    sink: &dyn ProgressSink,
    stop_flag: &StopFlag,
) -> AppResult<ExtractResult> {
    let estimated_total = count_entries(archive_path)?;
    extract_zip_with_estimate(archive_path, output_dir, estimated_total, sink, stop_flag)
}

/// Распаковать ZIP архив с заданной оценкой числа записей
///
/// Оценка может не совпадать с реальным числом записей: проценты
/// обрезаются до 100, а по успешному завершению 100 отправляется ровно один раз.
pub fn extract_zip_with_estimate(
    archive_path: &Path,
    output_dir: &Path,
    estimated_total: usize,
    sink: &dyn ProgressSink,
    stop_flag: &StopFlag,
) -> AppResult<ExtractResult> {
    info!(
        archive = %archive_path.display(),
        output = %output_dir.display(),
        estimated_total,
        "extracting archive"
    );

    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;

    fs::create_dir_all(output_dir).map_err(|e| write_error(output_dir, e))?;

    let mut tracker = ProgressTracker::new(sink);
    let mut result = ExtractResult::default();
    // Права папок ставятся после цикла: папка 0o555 не должна мешать записи её файлов
    let mut dir_modes: Vec<(PathBuf, u32)> = Vec::new();

    for i in 0..archive.len() {
        if stop_flag.is_stopped() {
            info!(archive = %archive_path.display(), done = result.entries, "extraction cancelled");
            return Err(AppError::Cancelled);
        }

        let mut entry = archive.by_index(i)?;

        // enclosed_name отбрасывает абсолютные пути и выход через ".."
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| AppError::extraction(format!("unsafe entry path: {}", entry.name())))?;
        let outpath = output_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath).map_err(|e| write_error(&outpath, e))?;
            if let Some(mode) = entry.unix_mode() {
                dir_modes.push((outpath.clone(), mode));
            }
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
            }

            let outfile = File::create(&outpath).map_err(|e| write_error(&outpath, e))?;
            let mut writer = BufWriter::new(outfile);
            let size = io::copy(&mut entry, &mut writer)
                .map_err(|e| AppError::extraction(format!("{}: {e}", entry.name())))?;
            writer.flush().map_err(|e| write_error(&outpath, e))?;

            result.files_count += 1;
            result.total_size += size;

            if let Some(mode) = entry.unix_mode() {
                apply_mode(&outpath, mode);
            }
        }

        result.entries += 1;
        debug!(entry = %outpath.display(), done = result.entries, "entry extracted");
        tracker.update(entry_percent(result.entries, estimated_total));
    }

    // Вложенные папки раньше родительских
    for (path, mode) in dir_modes.iter().rev() {
        apply_mode(path, *mode);
    }

    tracker.finish();

    info!(
        archive = %archive_path.display(),
        entries = result.entries,
        files = result.files_count,
        bytes = result.total_size,
        "extraction completed"
    );
    Ok(result)
}

/// Установить права из архива (только на Unix, ошибки игнорируются)
#[cfg(unix)]
fn apply_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    let _ = fs::set_permissions(path, fs::Permissions::from_mode(mode));
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: u32) {}

fn write_error(path: &Path, err: io::Error) -> AppError {
    AppError::extraction(format!("cannot write {}: {err}", path.display()))
}
