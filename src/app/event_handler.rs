//! Обработка событий фоновых операций

use super::state::App;
use std::path::PathBuf;
use tracing::debug;
use zip_extractor::error::AppError;
use zip_extractor::events::{OperationEvent, ProgressChannel};
use zip_extractor::extract::is_zip;

impl App {
    /// Обработать все ожидающие события
    pub fn process_events(&mut self) {
        // Собираем все события в вектор
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }

        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: OperationEvent) {
        // События чужих (уже завершённых) запросов игнорируем
        let is_active = self
            .active
            .as_ref()
            .is_some_and(|active| active.id == event.request());
        if !is_active {
            debug!(request = %event.request(), "stale event ignored");
            return;
        }

        match event {
            OperationEvent::Progress(_, _, percent) => {
                self.on_progress(percent);
            }
            OperationEvent::Finished(_, channel, message) => {
                self.on_finished(channel, message);
            }
            OperationEvent::Failed(_, _, message) => {
                self.on_failed(message);
            }
        }
    }

    fn on_progress(&mut self, percent: u8) {
        // Процент только растёт, окно закрывается само на 100
        self.progress = self.progress.max(percent.min(100));
    }

    fn on_finished(&mut self, channel: ProgressChannel, message: String) {
        self.active = None;
        self.progress = 100;

        let t = self.t();
        let text = match channel {
            ProgressChannel::ExtractProgress => t.extraction_completed.to_string(),
            ProgressChannel::DownloadProgress => format!("{} {}", t.download_completed, message),
        };
        self.log(format!("✅ {}", text));
        self.notify(text, false);

        // Скачанный ZIP сразу готов к распаковке
        if channel == ProgressChannel::DownloadProgress && is_zip(&message) {
            let path = PathBuf::from(message);
            self.archive_summary = None;
            self.archive_path = Some(path.clone());
            self.inspect_archive(path);
        }
    }

    fn on_failed(&mut self, message: String) {
        // Окно прогресса закрывается сразу
        self.active = None;
        self.progress = 0;

        let t = self.t();
        if message == AppError::Cancelled.to_string() {
            self.log(format!("⏹ {}", t.operation_cancelled));
            self.notify(t.operation_cancelled, false);
        } else {
            self.log(format!("❌ {}: {}", t.error, message));
            self.notify(format!("{}: {}", t.error, message), true);
        }
    }
}
