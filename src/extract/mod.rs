//! Модуль распаковки архивов
//!
//! Поддерживается только ZIP: число записей берётся из центрального
//! каталога, прогресс отправляется по каждой распакованной записи.

mod inspect;
mod types;
mod zip;

pub use inspect::{count_entries, inspect};
pub use types::{ArchiveSummary, EXTRACTION_SUCCESS, ExtractResult, ExtractionRequest, is_zip};
pub use self::zip::{extract_zip, extract_zip_with_estimate};

use crate::error::AppResult;
use crate::progress::{ProgressSink, StopFlag};
use tracing::debug;

/// Выполнить запрос на распаковку
pub fn run_extraction(
    request: &ExtractionRequest,
    sink: &dyn ProgressSink,
    stop_flag: &StopFlag,
) -> AppResult<ExtractResult> {
    debug!(archive = %request.archive_name(), "extraction request accepted");
    extract_zip(&request.archive_path, &request.destination_dir, sink, stop_flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::progress::NoProgress;
    use std::io::Write;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn write_zip(path: &Path, files: &[(&str, &[u8])], dirs: &[&str]) {
        let file = std::fs::File::create(path).unwrap();
        let mut writer = ::zip::ZipWriter::new(file);
        let options = ::zip::write::SimpleFileOptions::default();
        for dir in dirs {
            writer.add_directory(*dir, options).unwrap();
        }
        for (name, data) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
    }

    fn recorder() -> (Arc<Mutex<Vec<u8>>>, impl Fn(u8) + Send + Sync) {
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink_values = values.clone();
        (values, move |p| sink_values.lock().unwrap().push(p))
    }

    #[test]
    fn test_is_zip() {
        assert!(is_zip("file.zip"));
        assert!(is_zip("FILE.ZIP"));
        assert!(!is_zip("file.tar.gz"));
        assert!(!is_zip("zip"));
    }

    #[test]
    fn test_extraction_request_validation() {
        assert!(matches!(
            ExtractionRequest::new("", "/out"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            ExtractionRequest::new("a.zip", ""),
            Err(AppError::InvalidInput(_))
        ));
        let request = ExtractionRequest::new("/tmp/a.zip", "/out").unwrap();
        assert_eq!(request.archive_name(), "a.zip");
    }

    #[test]
    fn test_count_entries_reads_central_directory() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(&archive, &[("a.txt", b"a\nb\nc\n"), ("b/c.txt", b"x")], &["b/"]);

        assert_eq!(count_entries(&archive).unwrap(), 3);
    }

    #[test]
    fn test_count_entries_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = count_entries(&dir.path().join("missing.zip")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_count_entries_not_a_zip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fake.zip");
        std::fs::write(&path, b"line one of a plain text file\nline two of a plain text file\nline three\n").unwrap();
        let err = count_entries(&path).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_inspect_summary() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(&archive, &[("a.txt", b"12345"), ("d/b.txt", b"123")], &["d/"]);

        let summary = inspect(&archive).unwrap();
        assert_eq!(summary.entries, 3);
        assert_eq!(summary.files, 2);
        assert_eq!(summary.dirs, 1);
        assert_eq!(summary.uncompressed_size, 8);
    }

    #[test]
    fn test_extract_zip_writes_tree() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(&archive, &[("top.txt", b"top"), ("nested/deep/file.txt", b"deep")], &[]);
        let out = dir.path().join("out");

        let result = extract_zip(&archive, &out, &NoProgress, &StopFlag::new()).unwrap();

        assert_eq!(result.entries, 2);
        assert_eq!(result.files_count, 2);
        assert_eq!(result.total_size, 7);
        assert_eq!(std::fs::read(out.join("top.txt")).unwrap(), b"top");
        assert_eq!(std::fs::read(out.join("nested/deep/file.txt")).unwrap(), b"deep");
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_read_only_directory_keeps_children() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("ro.zip");
        {
            let file = std::fs::File::create(&archive).unwrap();
            let mut writer = ::zip::ZipWriter::new(file);
            let options = ::zip::write::SimpleFileOptions::default();
            writer.add_directory("locked/", options.unix_permissions(0o555)).unwrap();
            writer.start_file("locked/inner.txt", options.unix_permissions(0o644)).unwrap();
            writer.write_all(b"inside").unwrap();
            writer.start_file("locked/sub/deeper.txt", options).unwrap();
            writer.write_all(b"deeper").unwrap();
            writer.finish().unwrap();
        }
        let out = dir.path().join("out");

        let (values, sink) = recorder();
        let result = extract_zip(&archive, &out, &sink, &StopFlag::new()).unwrap();

        assert_eq!(result.files_count, 2);
        assert_eq!(values.lock().unwrap().last(), Some(&100));
        assert_eq!(std::fs::read(out.join("locked/inner.txt")).unwrap(), b"inside");
        assert_eq!(std::fs::read(out.join("locked/sub/deeper.txt")).unwrap(), b"deeper");

        let locked = out.join("locked");
        let mode = std::fs::metadata(&locked).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o555);

        // иначе TempDir не сможет удалить содержимое
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_extract_progress_ten_entries() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("a.zip");
        let names: Vec<String> = (0..10).map(|i| format!("f{i}.txt")).collect();
        let files: Vec<(&str, &[u8])> = names.iter().map(|n| (n.as_str(), &b"data"[..])).collect();
        write_zip(&archive, &files, &[]);

        let (values, sink) = recorder();
        extract_zip(&archive, &dir.path().join("out"), &sink, &StopFlag::new()).unwrap();

        assert_eq!(*values.lock().unwrap(), vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_extract_progress_underestimate_single_hundred() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(&archive, &[("a", b"1"), ("b", b"2"), ("c", b"3"), ("d", b"4")], &[]);

        let (values, sink) = recorder();
        extract_zip_with_estimate(&archive, &dir.path().join("out"), 2, &sink, &StopFlag::new()).unwrap();

        let values = values.lock().unwrap();
        assert_eq!(*values, vec![50, 100]);
        assert_eq!(values.iter().filter(|&&v| v == 100).count(), 1);
    }

    #[test]
    fn test_extract_progress_overestimate_forces_hundred() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(&archive, &[("a", b"1"), ("b", b"2")], &[]);

        let (values, sink) = recorder();
        extract_zip_with_estimate(&archive, &dir.path().join("out"), 8, &sink, &StopFlag::new()).unwrap();

        assert_eq!(*values.lock().unwrap(), vec![13, 25, 100]);
    }

    #[test]
    fn test_extract_rejects_path_traversal() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("evil.zip");
        write_zip(&archive, &[("../evil.txt", b"boom")], &[]);
        let out = dir.path().join("out");

        let err = extract_zip(&archive, &out, &NoProgress, &StopFlag::new()).unwrap_err();

        assert!(matches!(err, AppError::Extraction(_)));
        assert!(!dir.path().join("evil.txt").exists());
    }

    #[test]
    fn test_extract_stopped_before_first_entry() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(&archive, &[("a.txt", b"1")], &[]);
        let out = dir.path().join("out");

        let stop = StopFlag::new();
        stop.stop();
        let err = extract_zip(&archive, &out, &NoProgress, &stop).unwrap_err();

        assert!(err.is_cancelled());
        assert!(!out.join("a.txt").exists());
    }

    #[test]
    fn test_extract_stopped_midway() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(&archive, &[("a", b"1"), ("b", b"2"), ("c", b"3")], &[]);
        let out = dir.path().join("out");

        let stop = StopFlag::new();
        let stop_in_sink = stop.clone();
        let sink = move |_p: u8| stop_in_sink.stop();
        let err = extract_zip(&archive, &out, &sink, &stop).unwrap_err();

        assert!(err.is_cancelled());
        assert!(out.join("a").exists());
        assert!(!out.join("b").exists());
    }

    #[test]
    fn test_run_extraction_corrupt_archive() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("broken.zip");
        std::fs::write(&archive, b"PK\x03\x04 this header is followed by garbage and no central directory at all").unwrap();

        let request = ExtractionRequest::new(&archive, dir.path().join("out")).unwrap();
        let err = run_extraction(&request, &NoProgress, &StopFlag::new()).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
