//! Прогресс операций и флаг остановки
//!
//! Каждая операция получает свой `ProgressSink`, поэтому параллельные
//! запросы не мешают друг другу. `ProgressTracker` следит за тем, чтобы
//! проценты не убывали, не превышали 100, а 100 приходило ровно один раз.

use std::sync::Arc;
use tokio::sync::watch;

/// Получатель процентов прогресса
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, percent: u8);
}

impl<F> ProgressSink for F
where
    F: Fn(u8) + Send + Sync,
{
    fn on_progress(&self, percent: u8) {
        self(percent)
    }
}

/// Sink, который ничего не делает
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&self, _percent: u8) {}
}

/// Процент загрузки: floor(received / total * 100), 0 если размер неизвестен
pub fn transfer_percent(received: u64, total: Option<u64>) -> u8 {
    match total {
        Some(total) if total > 0 => {
            let pct = (received as u128 * 100 / total as u128).min(100);
            pct as u8
        }
        _ => 0,
    }
}

/// Процент распаковки: round(done / total * 100), ограничен 0..=100
pub fn entry_percent(done: usize, total: usize) -> u8 {
    let total = total.max(1) as f64;
    let pct = (done as f64 / total * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Обёртка над sink с правилами монотонности
pub struct ProgressTracker<'a> {
    sink: &'a dyn ProgressSink,
    last: Option<u8>,
    completed: bool,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(sink: &'a dyn ProgressSink) -> Self {
        Self {
            sink,
            last: None,
            completed: false,
        }
    }

    /// Отправить очередное значение
    ///
    /// Значение поднимается до последнего отправленного и обрезается до 100.
    /// После 100 ничего не отправляется.
    pub fn update(&mut self, percent: u8) {
        if self.completed {
            return;
        }
        let percent = percent.min(100).max(self.last.unwrap_or(0));
        self.last = Some(percent);
        if percent == 100 {
            self.completed = true;
        }
        self.sink.on_progress(percent);
    }

    /// Завершить операцию: 100, если оно ещё не было отправлено
    pub fn finish(&mut self) {
        if !self.completed {
            self.update(100);
        }
    }
}

/// Флаг остановки операции
///
/// Синхронный код проверяет `is_stopped` на границе записи архива,
/// асинхронный ждёт `stopped()` в `select!` рядом с сетевым ожиданием.
#[derive(Debug, Clone)]
pub struct StopFlag(Arc<watch::Sender<bool>>);

impl Default for StopFlag {
    fn default() -> Self {
        Self(Arc::new(watch::Sender::new(false)))
    }
}

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.send_replace(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.0.borrow()
    }

    /// Завершается, когда флаг поднят (сразу, если уже поднят)
    pub async fn stopped(&self) {
        let mut rx = self.0.subscribe();
        // Отправитель живёт в self, канал не закроется
        let _ = rx.wait_for(|stopped| *stopped).await;
    }
}
