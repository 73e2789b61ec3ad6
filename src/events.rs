//! События операций для GUI и CLI

use crate::progress::ProgressSink;
use std::fmt;
use tokio::sync::mpsc;

/// Идентификатор запроса, по нему события маршрутизируются к своей операции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Канал прогресса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressChannel {
    DownloadProgress,
    ExtractProgress,
}

impl ProgressChannel {
    /// Имя канала
    pub fn name(&self) -> &'static str {
        match self {
            Self::DownloadProgress => "download-progress",
            Self::ExtractProgress => "extract-progress",
        }
    }
}

/// События операций
#[derive(Debug, Clone, PartialEq)]
pub enum OperationEvent {
    /// Прогресс (запрос, канал, процент 0..=100)
    Progress(RequestId, ProgressChannel, u8),
    /// Операция завершена (запрос, канал, сообщение/путь)
    Finished(RequestId, ProgressChannel, String),
    /// Ошибка операции (запрос, канал, текст ошибки)
    Failed(RequestId, ProgressChannel, String),
}

impl OperationEvent {
    pub fn request(&self) -> RequestId {
        match self {
            Self::Progress(id, _, _) | Self::Finished(id, _, _) | Self::Failed(id, _, _) => *id,
        }
    }

    pub fn channel(&self) -> ProgressChannel {
        match self {
            Self::Progress(_, ch, _) | Self::Finished(_, ch, _) | Self::Failed(_, ch, _) => *ch,
        }
    }

    /// Последнее событие операции
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Progress(..))
    }
}

/// Sink, отправляющий прогресс одного запроса в общий канал событий
#[derive(Clone)]
pub struct ChannelSink {
    request: RequestId,
    channel: ProgressChannel,
    tx: mpsc::UnboundedSender<OperationEvent>,
}

impl ChannelSink {
    pub fn new(
        request: RequestId,
        channel: ProgressChannel,
        tx: mpsc::UnboundedSender<OperationEvent>,
    ) -> Self {
        Self { request, channel, tx }
    }
}

impl ProgressSink for ChannelSink {
    fn on_progress(&self, percent: u8) {
        // Получатель мог закрыться (окно закрыто) - это не ошибка операции
        let _ = self.tx.send(OperationEvent::Progress(self.request, self.channel, percent));
    }
}
