//! Загрузка файла по HTTP с прогрессом

use crate::error::{AppError, AppResult};
use crate::progress::{ProgressSink, ProgressTracker, StopFlag, transfer_percent};
use futures_util::StreamExt;
use reqwest::Url;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Имя файла, если в URL нет сегмента пути
pub const DEFAULT_FILE_NAME: &str = "downloaded_file";

/// Суффикс недокачанного файла
const PARTIAL_SUFFIX: &str = "part";

/// Запрос на загрузку
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub url: Url,
    pub destination_dir: PathBuf,
}

impl TransferRequest {
    /// Проверить URL и папку назначения
    pub fn new(url: &str, destination_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let url = url.trim();
        let destination_dir = destination_dir.into();

        if url.is_empty() {
            return Err(AppError::invalid_input("no URL given"));
        }
        if destination_dir.as_os_str().is_empty() {
            return Err(AppError::invalid_input("no output folder selected"));
        }

        let url = Url::parse(url)
            .map_err(|e| AppError::invalid_input(format!("invalid URL '{url}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::invalid_input(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }

        Ok(Self { url, destination_dir })
    }

    /// Имя файла из последнего сегмента пути URL
    pub fn file_name(&self) -> String {
        file_name_from_url(&self.url)
    }

    /// Полный путь файла назначения
    pub fn destination_path(&self) -> PathBuf {
        self.destination_dir.join(self.file_name())
    }

    /// Временный файл, в который пишется тело ответа до успешного конца
    pub fn partial_path(&self) -> PathBuf {
        self.destination_dir.join(format!("{}.{PARTIAL_SUFFIX}", self.file_name()))
    }
}

/// Последний непустой сегмент пути или `downloaded_file`
pub fn file_name_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
}

/// Скачать файл в папку назначения
///
/// Прогресс: 0 до запроса, floor(received / Content-Length * 100) на каждый
/// чанк (0, если длина не объявлена), 100 по завершении. Тело пишется в
/// `<имя>.part` и переименовывается только после успешного конца, так что
/// существующий файл с тем же именем не трогается до успеха. Остановка
/// прерывает и ожидание ответа, и ожидание очередного чанка.
pub async fn download_file(
    client: &reqwest::Client,
    request: &TransferRequest,
    sink: &dyn ProgressSink,
    stop_flag: &StopFlag,
) -> AppResult<PathBuf> {
    let path = request.destination_path();
    let partial = request.partial_path();
    info!(url = %request.url, path = %path.display(), "downloading");

    if stop_flag.is_stopped() {
        return Err(AppError::Cancelled);
    }

    fs::create_dir_all(&request.destination_dir).await?;
    let mut file = File::create(&partial).await?;

    let mut tracker = ProgressTracker::new(sink);
    tracker.update(0);

    let outcome = stream_to_file(client, request, &mut file, &mut tracker, stop_flag).await;
    drop(file);

    let outcome = match outcome {
        Ok(received) => fs::rename(&partial, &path)
            .await
            .map(|_| received)
            .map_err(AppError::from),
        Err(err) => Err(err),
    };

    match outcome {
        Ok(received) => {
            tracker.finish();
            info!(path = %path.display(), bytes = received, "download complete");
            Ok(path)
        }
        Err(err) => {
            match &err {
                AppError::Cancelled => info!(url = %request.url, "download cancelled"),
                other => warn!(url = %request.url, error = %other, "download failed"),
            }
            remove_partial(&partial).await;
            Err(err)
        }
    }
}

async fn stream_to_file(
    client: &reqwest::Client,
    request: &TransferRequest,
    file: &mut File,
    tracker: &mut ProgressTracker<'_>,
    stop_flag: &StopFlag,
) -> AppResult<u64> {
    let response = tokio::select! {
        _ = stop_flag.stopped() => return Err(AppError::Cancelled),
        response = client.get(request.url.clone()).send() => response?,
    };

    let status = response.status();
    debug!(url = %request.url, status = status.as_u16(), "response received");
    if status.as_u16() >= 400 {
        return Err(AppError::Http {
            status: status.as_u16(),
        });
    }

    let total = response.content_length().filter(|&len| len > 0);
    let mut received = 0u64;
    let mut stream = response.bytes_stream();

    loop {
        // Сервер может замолчать посреди тела, поэтому ждём чанк вместе с остановкой
        let chunk = tokio::select! {
            biased;
            _ = stop_flag.stopped() => return Err(AppError::Cancelled),
            chunk = stream.next() => chunk,
        };
        let Some(chunk) = chunk else {
            break;
        };
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        received += chunk.len() as u64;
        tracker.update(transfer_percent(received, total));
    }

    file.flush().await?;
    Ok(received)
}

async fn remove_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        warn!(path = %path.display(), error = %e, "could not remove partial download");
    }
}
