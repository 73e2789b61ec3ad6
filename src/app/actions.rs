//! Действия приложения

use super::state::{ActiveOperation, App, DialogResult};
use std::path::PathBuf;
use tracing::info;
use zip_extractor::events::{ProgressChannel, RequestId};
use zip_extractor::extract;
use zip_extractor::progress::StopFlag;

impl App {
    // === Файловые диалоги ===

    /// Выбрать ZIP архив (асинхронно)
    pub fn select_archive_dialog(&mut self) {
        if !self.can_edit() {
            return;
        }
        self.dialog_open = true;

        let surface = self.surface.clone();
        let tx = self.dialog_tx.clone();
        self.runtime.spawn(async move {
            let result = match surface.select_archive().await {
                Some(path) => DialogResult::ArchiveFile(path),
                None => DialogResult::Dismissed,
            };
            let _ = tx.send(result);
        });
    }

    /// Выбрать папку распаковки (асинхронно)
    pub fn select_extract_destination_dialog(&mut self) {
        self.select_folder_dialog(DialogResult::ExtractDestination);
    }

    /// Выбрать папку загрузки (асинхронно)
    pub fn select_download_dir_dialog(&mut self) {
        self.select_folder_dialog(DialogResult::DownloadDirectory);
    }

    fn select_folder_dialog(&mut self, wrap: fn(PathBuf) -> DialogResult) {
        if !self.can_edit() {
            return;
        }
        self.dialog_open = true;

        let surface = self.surface.clone();
        let tx = self.dialog_tx.clone();
        self.runtime.spawn(async move {
            let result = surface
                .select_folder()
                .await
                .map(wrap)
                .unwrap_or(DialogResult::Dismissed);
            let _ = tx.send(result);
        });
    }

    /// Прочитать центральный каталог выбранного архива в фоне
    pub(super) fn inspect_archive(&self, path: PathBuf) {
        let tx = self.dialog_tx.clone();
        self.runtime.spawn_blocking(move || {
            let summary = extract::inspect(&path).map_err(|e| e.to_string());
            let _ = tx.send(DialogResult::ArchiveSummary(path, summary));
        });
    }

    /// Обработать результаты файловых диалогов
    pub fn process_dialog_results(&mut self) {
        // Собираем все результаты сначала, чтобы освободить borrow
        let mut results = Vec::new();
        while let Ok(result) = self.dialog_rx.try_recv() {
            results.push(result);
        }

        for result in results {
            match result {
                DialogResult::ArchiveFile(path) => {
                    self.dialog_open = false;
                    self.log(format!("📦 {}", path.display()));
                    self.archive_summary = None;
                    self.archive_path = Some(path.clone());
                    self.inspect_archive(path);
                }
                DialogResult::ArchiveSummary(path, summary) => {
                    // Пользователь мог уже выбрать другой архив
                    if self.archive_path.as_ref() != Some(&path) {
                        continue;
                    }
                    match summary {
                        Ok(summary) => self.archive_summary = Some(summary),
                        Err(e) => {
                            let prefix = self.t().error;
                            self.log(format!("❌ {}: {}", prefix, e));
                        }
                    }
                }
                DialogResult::ExtractDestination(path) => {
                    self.dialog_open = false;
                    self.extract_destination = Some(path.clone());
                    self.settings.last_output_dir = Some(path);
                    self.save_settings();
                }
                DialogResult::DownloadDirectory(path) => {
                    self.dialog_open = false;
                    self.download_dir = path.clone();
                    self.settings.download_dir = path;
                    self.save_settings();
                }
                DialogResult::Dismissed => {
                    self.dialog_open = false;
                }
            }
        }
    }

    // === Операции ===

    /// Начать распаковку выбранного архива
    pub fn start_extraction(&mut self) {
        if self.is_busy() {
            return;
        }
        let t = self.t();

        let Some(archive) = self.archive_path.clone() else {
            self.notify(t.no_archive, true);
            return;
        };
        let Some(destination) = self.extract_destination.clone() else {
            self.notify(t.no_folder, true);
            return;
        };

        let handle = self.surface.extract_archive(archive.clone(), destination.clone());
        info!(request = %handle.id(), "extraction started from UI");
        self.log(format!(
            "📦 {} {} → {}",
            t.extracting,
            archive.display(),
            destination.display()
        ));
        self.begin(handle.id(), ProgressChannel::ExtractProgress, handle.stop_flag());
    }

    /// Начать загрузку по введённому URL
    pub fn start_download(&mut self) {
        if self.is_busy() {
            return;
        }
        let t = self.t();

        let url = self.url.trim().to_string();
        if url.is_empty() {
            self.notify(t.no_url, true);
            return;
        }

        let handle = self.surface.download_file(url.clone(), self.download_dir.clone());
        info!(request = %handle.id(), "download started from UI");
        self.log(format!("⬇ {} {}", t.downloading, url));
        self.begin(handle.id(), ProgressChannel::DownloadProgress, handle.stop_flag());
    }

    fn begin(&mut self, id: RequestId, channel: ProgressChannel, stop_flag: StopFlag) {
        self.progress = 0;
        self.notification = None;
        self.status_message = match channel {
            ProgressChannel::ExtractProgress => self.t().extracting,
            ProgressChannel::DownloadProgress => self.t().downloading,
        }
        .to_string();
        self.active = Some(ActiveOperation {
            id,
            channel,
            stop_flag,
            cancelling: false,
        });
    }

    /// Отменить текущую операцию
    pub fn cancel(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.cancelling {
            return;
        }
        active.cancelling = true;
        active.stop_flag.stop();
        info!(request = %active.id, "cancel requested");

        let message = self.t().cancelling;
        self.status_message = message.to_string();
        self.log(format!("⏹ {}", message));
    }
}
