//! Таблицы переводов

use super::Translations;

pub static EN: Translations = Translations {
    app_title: "ZIP Extractor",
    mode_label: "Mode",
    mode_extract: "Extract",
    mode_download: "Download",

    extract_title: "Extract ZIP archive",
    archive_path: "Archive:",
    no_archive_selected: "No archive selected",
    select_archive: "Select ZIP File",
    extract_destination: "Output folder:",
    select_folder: "Select Output Folder",
    choose: "Choose...",
    extract_zip: "Extract ZIP",
    archive_entries: "Entries:",
    archive_files: "Files:",
    archive_dirs: "Folders:",
    archive_size: "Uncompressed size:",

    download_title: "Download file",
    url: "URL:",
    url_hint: "https://example.com/file.zip",
    download_folder: "Download folder:",
    download: "Download",

    extracting: "Extracting...",
    downloading: "Downloading...",
    cancel: "Cancel",
    cancelling: "Cancelling...",

    status: "Status",
    log: "Log",
    clear: "Clear",
    log_empty: "Log is empty",
    ready: "Ready",
    error: "Error",
    extraction_completed: "Extraction successful!",
    download_completed: "Downloaded to",
    operation_cancelled: "Operation cancelled",
    no_archive: "Select a ZIP file first",
    no_url: "Enter a URL first",
    no_folder: "Select an output folder first",
};

pub static RU: Translations = Translations {
    app_title: "ZIP Extractor - распаковка архивов",
    mode_label: "Режим",
    mode_extract: "Распаковка",
    mode_download: "Загрузка",

    extract_title: "Распаковка ZIP архива",
    archive_path: "Архив:",
    no_archive_selected: "Архив не выбран",
    select_archive: "Выберите ZIP файл",
    extract_destination: "Папка назначения:",
    select_folder: "Выберите папку назначения",
    choose: "Выбрать...",
    extract_zip: "Распаковать ZIP",
    archive_entries: "Записей:",
    archive_files: "Файлов:",
    archive_dirs: "Папок:",
    archive_size: "Размер после распаковки:",

    download_title: "Загрузка файла",
    url: "URL:",
    url_hint: "https://example.com/file.zip",
    download_folder: "Папка загрузки:",
    download: "Скачать",

    extracting: "Распаковка...",
    downloading: "Загрузка...",
    cancel: "Отмена",
    cancelling: "Отмена...",

    status: "Статус",
    log: "Лог",
    clear: "Очистить",
    log_empty: "Лог пуст",
    ready: "Готово к работе",
    error: "Ошибка",
    extraction_completed: "Распаковка завершена!",
    download_completed: "Сохранено в",
    operation_cancelled: "Операция отменена",
    no_archive: "Сначала выберите ZIP файл",
    no_url: "Сначала введите URL",
    no_folder: "Сначала выберите папку назначения",
};

pub static UK: Translations = Translations {
    app_title: "ZIP Extractor - розпакування архівів",
    mode_label: "Режим",
    mode_extract: "Розпакування",
    mode_download: "Завантаження",

    extract_title: "Розпакування ZIP архіву",
    archive_path: "Архів:",
    no_archive_selected: "Архів не обрано",
    select_archive: "Оберіть ZIP файл",
    extract_destination: "Тека призначення:",
    select_folder: "Оберіть теку призначення",
    choose: "Обрати...",
    extract_zip: "Розпакувати ZIP",
    archive_entries: "Записів:",
    archive_files: "Файлів:",
    archive_dirs: "Тек:",
    archive_size: "Розмір після розпакування:",

    download_title: "Завантаження файлу",
    url: "URL:",
    url_hint: "https://example.com/file.zip",
    download_folder: "Тека завантаження:",
    download: "Завантажити",

    extracting: "Розпакування...",
    downloading: "Завантаження...",
    cancel: "Скасувати",
    cancelling: "Скасування...",

    status: "Статус",
    log: "Лог",
    clear: "Очистити",
    log_empty: "Лог порожній",
    ready: "Готово до роботи",
    error: "Помилка",
    extraction_completed: "Розпакування завершено!",
    download_completed: "Збережено в",
    operation_cancelled: "Операцію скасовано",
    no_archive: "Спочатку оберіть ZIP файл",
    no_url: "Спочатку введіть URL",
    no_folder: "Спочатку оберіть теку призначення",
};
