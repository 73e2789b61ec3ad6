//! Состояние приложения

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::warn;
use zip_extractor::commands::{CommandSurface, NativeDialogs};
use zip_extractor::config::Settings;
use zip_extractor::error::AppResult;
use zip_extractor::events::{OperationEvent, ProgressChannel, RequestId};
use zip_extractor::extract::ArchiveSummary;
use zip_extractor::i18n::{Language, Translations, t};
use zip_extractor::progress::StopFlag;

/// Сколько показывать уведомление
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Результат файлового диалога или фоновой проверки
pub enum DialogResult {
    ArchiveFile(PathBuf),
    ArchiveSummary(PathBuf, Result<ArchiveSummary, String>),
    ExtractDestination(PathBuf),
    DownloadDirectory(PathBuf),
    /// Диалог закрыт без выбора
    Dismissed,
}

/// Режим работы приложения
#[derive(PartialEq, Clone, Copy)]
pub enum Mode {
    Extract,
    Download,
}

/// Операция, прогресс которой сейчас показывается
pub struct ActiveOperation {
    pub id: RequestId,
    pub channel: ProgressChannel,
    pub stop_flag: StopFlag,
    pub cancelling: bool,
}

/// Уведомление в верхней части окна
pub struct Notification {
    pub text: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

impl Notification {
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTIFICATION_TTL
    }
}

/// Главная структура приложения
pub struct App {
    // Язык интерфейса
    pub language: Language,

    // Режим работы
    pub mode: Mode,

    pub settings: Settings,

    // === Распаковка ===
    pub archive_path: Option<PathBuf>,
    pub archive_summary: Option<ArchiveSummary>,
    pub extract_destination: Option<PathBuf>,

    // === Загрузка ===
    pub url: String,
    pub download_dir: PathBuf,

    // === Текущая операция ===
    pub active: Option<ActiveOperation>,
    /// Последний процент активного запроса
    pub progress: u8,
    pub dialog_open: bool,

    // === Общее состояние ===
    pub status_message: String,
    pub notification: Option<Notification>,
    pub log_messages: Vec<String>,

    // === Runtime ===
    pub runtime: tokio::runtime::Runtime,
    pub surface: Arc<CommandSurface>,
    pub dialogs: Arc<NativeDialogs>,
    pub event_rx: mpsc::UnboundedReceiver<OperationEvent>,

    // === Файловые диалоги (асинхронные) ===
    pub dialog_tx: mpsc::UnboundedSender<DialogResult>,
    pub dialog_rx: mpsc::UnboundedReceiver<DialogResult>,
}

impl App {
    pub fn new(settings: Settings) -> AppResult<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let language = settings.language;

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (dialog_tx, dialog_rx) = mpsc::unbounded_channel();

        let dialogs = Arc::new(NativeDialogs::new(language));
        let surface = CommandSurface::new(
            runtime.handle().clone(),
            dialogs.clone(),
            &settings.transfer_options(),
            event_tx,
        )?;

        Ok(Self {
            language,
            mode: Mode::Extract,
            archive_path: None,
            archive_summary: None,
            extract_destination: settings.last_output_dir.clone(),
            url: String::new(),
            download_dir: settings.download_dir.clone(),
            active: None,
            progress: 0,
            dialog_open: false,
            status_message: t(language).ready.to_string(),
            notification: None,
            log_messages: Vec::new(),
            settings,
            runtime,
            surface: Arc::new(surface),
            dialogs,
            event_rx,
            dialog_tx,
            dialog_rx,
        })
    }

    /// Добавить сообщение в лог
    pub fn log(&mut self, message: impl Into<String>) {
        self.log_messages.push(message.into());
    }

    /// Идёт операция - кнопки запуска заблокированы
    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    /// Можно ли менять выбор файлов и папок
    pub fn can_edit(&self) -> bool {
        !self.is_busy() && !self.dialog_open
    }

    /// Окно прогресса видно до прихода 100%
    pub fn modal_visible(&self) -> bool {
        self.active.is_some() && self.progress < 100
    }

    /// Показать уведомление
    pub fn notify(&mut self, text: impl Into<String>, is_error: bool) {
        let text = text.into();
        self.status_message = text.clone();
        self.notification = Some(Notification {
            text,
            is_error,
            shown_at: Instant::now(),
        });
    }

    /// Сменить язык интерфейса и диалогов
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.dialogs.set_language(language);
        self.settings.language = language;
        self.save_settings();
    }

    /// Сохранить настройки (ошибка только в лог)
    pub fn save_settings(&mut self) {
        if let Err(e) = self.settings.save() {
            warn!(error = %e, "could not save settings");
            self.log(format!("⚠ {}", e));
        }
    }
}

impl App {
    /// Получить переводы для текущего языка
    pub fn t(&self) -> &'static Translations {
        t(self.language)
    }
}
