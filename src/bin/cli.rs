//! ZIP Extractor CLI - консольная версия распаковки и загрузки

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use zip_extractor::commands::{CommandSurface, Dialogs, OperationHandle};
use zip_extractor::config::Settings;
use zip_extractor::error::AppResult;
use zip_extractor::events::OperationEvent;
use zip_extractor::extract;
use zip_extractor::logging;
use zip_extractor::utils::{default_output_dir, format_size};

#[derive(Parser)]
#[command(name = "zip_extractor_cli")]
#[command(author = "toolza")]
#[command(version = "1.0")]
#[command(about = "Распаковка ZIP архивов и загрузка файлов по HTTP", long_about = None)]
struct Cli {
    /// Подробный лог (debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Распаковать ZIP архив
    Extract {
        /// Путь к архиву
        archive: PathBuf,

        /// Папка назначения (по умолчанию - рядом с архивом, по имени архива)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Скачать файл по URL
    Download {
        /// Адрес файла (http/https)
        url: String,

        /// Папка для сохранения (по умолчанию - из настроек)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Показать содержимое архива без распаковки
    Inspect {
        /// Путь к архиву
        archive: PathBuf,
    },
}

/// В консоли нет диалогов - пути приходят аргументами
struct NoDialogs;

#[async_trait]
impl Dialogs for NoDialogs {
    async fn pick_archive(&self) -> Option<PathBuf> {
        None
    }

    async fn pick_folder(&self) -> Option<PathBuf> {
        None
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let settings = Settings::load();

    // -v главнее ZIP_EXTRACTOR_LOG
    let explicit = cli.verbose.then_some("debug");
    logging::init(explicit, &settings.log_filter);

    let result = match cli.command {
        Commands::Extract { archive, output } => extract_archive(&settings, archive, output).await,
        Commands::Download { url, output } => download_file(&settings, url, output).await,
        Commands::Inspect { archive } => inspect_archive(&archive),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn command_surface(
    settings: &Settings,
) -> AppResult<(CommandSurface, mpsc::UnboundedReceiver<OperationEvent>)> {
    let (tx, rx) = mpsc::unbounded_channel();
    let surface = CommandSurface::new(
        tokio::runtime::Handle::current(),
        Arc::new(NoDialogs),
        &settings.transfer_options(),
        tx,
    )?;
    Ok((surface, rx))
}

async fn extract_archive(settings: &Settings, archive: PathBuf, output: Option<PathBuf>) -> AppResult<()> {
    let output = output.unwrap_or_else(|| default_output_dir(&archive));

    println!("📦 Архив: {}", archive.display());
    println!("📂 Папка назначения: {}", output.display());

    let (surface, rx) = command_surface(settings)?;
    let handle = surface.extract_archive(archive, output);
    let message = follow(handle, rx, "Распаковка").await?;

    println!("✅ {}", message);
    Ok(())
}

async fn download_file(settings: &Settings, url: String, output: Option<PathBuf>) -> AppResult<()> {
    let output = output.unwrap_or_else(|| settings.download_dir.clone());

    println!("⬇ URL: {}", url);
    println!("📂 Папка: {}", output.display());

    let (surface, rx) = command_surface(settings)?;
    let handle = surface.download_file(url, output);
    let path = follow(handle, rx, "Загрузка").await?;

    let size = tokio::fs::metadata(&path).await.map(|m| m.len()).unwrap_or(0);
    println!("✅ Сохранено: {} ({})", path.display(), format_size(size));
    Ok(())
}

fn inspect_archive(archive: &Path) -> AppResult<()> {
    let summary = extract::inspect(archive)?;

    println!("📦 {}", archive.display());
    println!("   Записей: {}", summary.entries);
    println!("   Файлов:  {}", summary.files);
    println!("   Папок:   {}", summary.dirs);
    println!("   Размер:  {}", format_size(summary.uncompressed_size));
    Ok(())
}

/// Показывать прогресс операции, пока не придёт финальное событие
///
/// Первый Ctrl+C выставляет флаг остановки, операция завершается с
/// `Cancelled`. Второй Ctrl+C завершает процесс сразу (код 130).
async fn follow<T>(
    handle: OperationHandle<T>,
    mut rx: mpsc::UnboundedReceiver<OperationEvent>,
    title: &str,
) -> AppResult<T> {
    let bar = progress_bar(title);

    let stop_flag = handle.stop_flag();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        eprintln!("\n⏹ Остановка... (Ctrl+C ещё раз - выход)");
        stop_flag.stop();

        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n⏹ Прервано");
            std::process::exit(130);
        }
    });

    while let Some(event) = rx.recv().await {
        if event.request() != handle.id() {
            continue;
        }
        match event {
            OperationEvent::Progress(_, _, percent) => bar.set_position(u64::from(percent)),
            OperationEvent::Finished(..) => {
                bar.finish();
                break;
            }
            OperationEvent::Failed(..) => {
                bar.abandon();
                break;
            }
        }
    }

    ctrl_c.abort();
    handle.join().await
}

fn progress_bar(title: &str) -> ProgressBar {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos:>3}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar.set_message(title.to_string());
    bar
}
