//! ZIP Extractor GUI - распаковка архивов и загрузка файлов

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use app::App;
use eframe::egui;
use zip_extractor::config::Settings;
use zip_extractor::i18n::t;

fn main() -> eframe::Result<()> {
    let settings = Settings::load();
    zip_extractor::logging::init(None, &settings.log_filter);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 520.0])
            .with_min_inner_size([560.0, 400.0]),
        ..Default::default()
    };

    let title = t(settings.language).app_title;
    eframe::run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(settings)?))),
    )
}
