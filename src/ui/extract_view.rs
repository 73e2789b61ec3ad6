//! UI для распаковки ZIP архива

use crate::app::App;
use eframe::egui;
use zip_extractor::utils::format_size;

impl App {
    /// Рендерим режим распаковки
    pub fn render_extract_mode(&mut self, ui: &mut egui::Ui) {
        let t = self.t();

        ui.heading(t.extract_title);
        ui.add_space(10.0);

        ui.separator();
        ui.add_space(10.0);

        // === Выбор архива ===
        self.render_path_row(ui, t.archive_path, self.archive_path.as_deref(), t.no_archive_selected);
        ui.add_space(5.0);

        if ui
            .add_enabled(self.can_edit(), egui::Button::new(t.select_archive))
            .clicked()
        {
            self.select_archive_dialog();
        }

        // Сводка из центрального каталога
        if let Some(summary) = &self.archive_summary {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(t.archive_entries).color(egui::Color32::GRAY));
                ui.label(summary.entries.to_string());
                ui.label(egui::RichText::new(t.archive_files).color(egui::Color32::GRAY));
                ui.label(summary.files.to_string());
                ui.label(egui::RichText::new(t.archive_dirs).color(egui::Color32::GRAY));
                ui.label(summary.dirs.to_string());
            });
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(t.archive_size).color(egui::Color32::GRAY));
                ui.label(format_size(summary.uncompressed_size));
            });
        }

        ui.add_space(15.0);

        // === Папка назначения ===
        self.render_path_row(
            ui,
            t.extract_destination,
            self.extract_destination.as_deref(),
            t.no_folder,
        );
        ui.add_space(5.0);

        if ui
            .add_enabled(self.can_edit(), egui::Button::new(t.choose))
            .clicked()
        {
            self.select_extract_destination_dialog();
        }

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(10.0);

        let ready = self.archive_path.is_some() && self.extract_destination.is_some();
        if ui
            .add_enabled(self.can_edit() && ready, egui::Button::new(format!("📦 {}", t.extract_zip)))
            .clicked()
        {
            self.start_extraction();
        }
    }
}
