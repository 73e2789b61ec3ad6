//! UI для загрузки файла по URL

use crate::app::App;
use eframe::egui;

impl App {
    /// Рендерим режим загрузки
    pub fn render_download_mode(&mut self, ui: &mut egui::Ui) {
        let t = self.t();

        ui.heading(t.download_title);
        ui.add_space(10.0);

        ui.separator();
        ui.add_space(10.0);

        let can_edit = self.can_edit();
        let mut submitted = false;
        ui.horizontal(|ui| {
            ui.label(t.url);
            let response = ui.add_enabled(
                can_edit,
                egui::TextEdit::singleline(&mut self.url)
                    .hint_text(t.url_hint)
                    .desired_width(f32::INFINITY),
            );
            // Enter в поле URL запускает загрузку
            submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        });

        ui.add_space(15.0);

        self.render_path_row(ui, t.download_folder, Some(self.download_dir.as_path()), t.no_folder);
        ui.add_space(5.0);

        if ui.add_enabled(can_edit, egui::Button::new(t.choose)).clicked() {
            self.select_download_dir_dialog();
        }

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(10.0);

        let has_url = !self.url.trim().is_empty();
        let clicked = ui
            .add_enabled(can_edit && has_url, egui::Button::new(format!("⬇ {}", t.download)))
            .clicked();

        if (clicked || submitted) && can_edit {
            self.start_download();
        }
    }
}
