//! Общие виджеты UI

use crate::app::App;
use eframe::egui;
use std::path::Path;
use zip_extractor::utils::truncate_string;

impl App {
    /// Строка "подпись: путь" с обрезкой длинного пути
    pub fn render_path_row(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        path: Option<&Path>,
        placeholder: &str,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);

            if let Some(path) = path {
                let path_str = path.display().to_string();
                let short_path = truncate_string(&path_str, 50);
                ui.label(egui::RichText::new(short_path).monospace())
                    .on_hover_text(path_str);
            } else {
                ui.label(egui::RichText::new(placeholder).color(egui::Color32::GRAY).italics());
            }
        });
    }

    /// Уведомление об успехе или ошибке
    pub fn render_notification(&mut self, ui: &mut egui::Ui) {
        let Some(notification) = &self.notification else {
            return;
        };

        let (icon, color) = if notification.is_error {
            ("❌", egui::Color32::from_rgb(200, 100, 100))
        } else {
            ("✅", egui::Color32::from_rgb(100, 200, 100))
        };

        let mut dismissed = false;
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("{} {}", icon, notification.text)).color(color));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed {
            self.notification = None;
        }
    }
}
