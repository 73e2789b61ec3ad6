//! Сетевой модуль - загрузка файлов по HTTP

mod client;
mod download;

pub use client::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_USER_AGENT, TransferOptions, build_client};
pub use download::{DEFAULT_FILE_NAME, TransferRequest, download_file, file_name_from_url};
