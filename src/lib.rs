//! ZIP Extractor - распаковка ZIP архивов и загрузка файлов по HTTP
//!
//! Общая библиотека для GUI и CLI версий.
//!
//! # Модули
//! - `commands` - команды интерфейса (выбор файлов, загрузка, распаковка)
//! - `config` - сохраняемые настройки
//! - `error` - ошибки приложения
//! - `events` - события прогресса с id запроса
//! - `extract` - подсчёт записей и распаковка ZIP
//! - `network` - загрузка файлов по HTTP
//! - `progress` - прогресс и флаг остановки
//! - `logging` - инициализация tracing
//! - `utils` - вспомогательные функции
//! - `i18n` - интернационализация (английский, русский, украинский)

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod extract;
pub mod i18n;
pub mod logging;
pub mod network;
pub mod progress;
pub mod utils;
