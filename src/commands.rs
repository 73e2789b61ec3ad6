//! Набор команд между интерфейсом и фоновыми операциями
//!
//! Каждая долгая операция получает свой `RequestId` и свой sink прогресса,
//! запускается на рантайме и сразу возвращает `OperationHandle`. Результат
//! приходит событием `Finished`/`Failed` и через `OperationHandle::join`.

use crate::error::{AppError, AppResult};
use crate::events::{ChannelSink, OperationEvent, ProgressChannel, RequestId};
use crate::extract::{self, EXTRACTION_SUCCESS, ExtractionRequest};
use crate::i18n::{Language, t};
use crate::network::{self, TransferOptions, TransferRequest};
use crate::progress::StopFlag;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Нативные диалоги выбора файла и папки
///
/// Отмена диалога - это `None`, а не ошибка.
#[async_trait]
pub trait Dialogs: Send + Sync {
    async fn pick_archive(&self) -> Option<PathBuf>;
    async fn pick_folder(&self) -> Option<PathBuf>;
}

/// Диалоги через rfd, заголовки на языке интерфейса
pub struct NativeDialogs {
    language: RwLock<Language>,
}

impl NativeDialogs {
    pub fn new(language: Language) -> Self {
        Self {
            language: RwLock::new(language),
        }
    }

    /// Сменить язык заголовков (вызывается при смене языка в UI)
    pub fn set_language(&self, language: Language) {
        *self.language.write().unwrap_or_else(|e| e.into_inner()) = language;
    }

    fn language(&self) -> Language {
        *self.language.read().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Dialogs for NativeDialogs {
    async fn pick_archive(&self) -> Option<PathBuf> {
        let title = t(self.language()).select_archive;
        // Блокирующий диалог в отдельном потоке, как и раньше в GUI
        tokio::task::spawn_blocking(move || {
            rfd::FileDialog::new()
                .set_title(title)
                .add_filter("ZIP Files", &["zip"])
                .pick_file()
        })
        .await
        .ok()
        .flatten()
    }

    async fn pick_folder(&self) -> Option<PathBuf> {
        let title = t(self.language()).select_folder;
        tokio::task::spawn_blocking(move || rfd::FileDialog::new().set_title(title).pick_folder())
            .await
            .ok()
            .flatten()
    }
}

/// Handle запущенной операции
pub struct OperationHandle<T> {
    id: RequestId,
    stop_flag: StopFlag,
    task: JoinHandle<AppResult<T>>,
}

impl<T> OperationHandle<T> {
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Флаг остановки (можно отдать в UI, чтобы отменить позже)
    pub fn stop_flag(&self) -> StopFlag {
        self.stop_flag.clone()
    }

    /// Остановить операцию: загрузка прерывается сразу, распаковка перед следующей записью
    pub fn cancel(&self) {
        self.stop_flag.stop();
    }

    /// Дождаться результата
    pub async fn join(self) -> AppResult<T> {
        self.task.await?
    }
}

/// Команды, доступные интерфейсу
pub struct CommandSurface {
    runtime: Handle,
    dialogs: Arc<dyn Dialogs>,
    client: reqwest::Client,
    events: mpsc::UnboundedSender<OperationEvent>,
    next_id: AtomicU64,
}

impl CommandSurface {
    pub fn new(
        runtime: Handle,
        dialogs: Arc<dyn Dialogs>,
        options: &TransferOptions,
        events: mpsc::UnboundedSender<OperationEvent>,
    ) -> AppResult<Self> {
        Ok(Self {
            runtime,
            dialogs,
            client: network::build_client(options)?,
            events,
            next_id: AtomicU64::new(1),
        })
    }

    fn next_request(&self) -> RequestId {
        RequestId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// selectArchive: путь к ZIP или `None`
    pub async fn select_archive(&self) -> Option<PathBuf> {
        self.dialogs.pick_archive().await
    }

    /// selectFolder: путь к папке или `None`
    pub async fn select_folder(&self) -> Option<PathBuf> {
        self.dialogs.pick_folder().await
    }

    /// downloadFile: скачать `url` в `destination_dir`, результат - путь файла
    pub fn download_file(
        &self,
        url: impl Into<String>,
        destination_dir: impl Into<PathBuf>,
    ) -> OperationHandle<PathBuf> {
        let id = self.next_request();
        let channel = ProgressChannel::DownloadProgress;
        let stop_flag = StopFlag::new();
        let url = url.into();
        let destination_dir = destination_dir.into();
        let client = self.client.clone();
        let events = self.events.clone();
        let task_stop = stop_flag.clone();

        info!(request = %id, url = %url, "download requested");

        let task = self.runtime.spawn(async move {
            let sink = ChannelSink::new(id, channel, events.clone());
            let result = async {
                let request = TransferRequest::new(&url, destination_dir)?;
                network::download_file(&client, &request, &sink, &task_stop).await
            }
            .await;

            report(&events, id, channel, &result, |path| path.display().to_string());
            result
        });

        OperationHandle { id, stop_flag, task }
    }

    /// extractArchive: распаковать архив, результат - сообщение об успехе
    pub fn extract_archive(
        &self,
        archive_path: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
    ) -> OperationHandle<String> {
        let id = self.next_request();
        let channel = ProgressChannel::ExtractProgress;
        let stop_flag = StopFlag::new();
        let archive_path = archive_path.into();
        let destination_dir = destination_dir.into();
        let events = self.events.clone();
        let task_stop = stop_flag.clone();

        info!(request = %id, archive = %archive_path.display(), "extraction requested");

        let task = self.runtime.spawn(async move {
            let sink = ChannelSink::new(id, channel, events.clone());
            // zip читает синхронно - уводим в пул блокирующих задач
            let result = tokio::task::spawn_blocking(move || {
                let request = ExtractionRequest::new(archive_path, destination_dir)?;
                extract::run_extraction(&request, &sink, &task_stop)
            })
            .await
            .map_err(AppError::from)
            .and_then(|r| r)
            .map(|_| EXTRACTION_SUCCESS.to_string());

            report(&events, id, channel, &result, |message| message.clone());
            result
        });

        OperationHandle { id, stop_flag, task }
    }
}

/// Отправить финальное событие операции
fn report<T>(
    events: &mpsc::UnboundedSender<OperationEvent>,
    id: RequestId,
    channel: ProgressChannel,
    result: &AppResult<T>,
    describe: impl FnOnce(&T) -> String,
) {
    let event = match result {
        Ok(value) => {
            let message = describe(value);
            info!(request = %id, channel = channel.name(), result = %message, "operation finished");
            OperationEvent::Finished(id, channel, message)
        }
        Err(err) => {
            error!(request = %id, channel = channel.name(), error = %err, "operation failed");
            OperationEvent::Failed(id, channel, err.to_string())
        }
    };
    let _ = events.send(event);
}
