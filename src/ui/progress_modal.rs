//! Модальное окно прогресса операции

use crate::app::App;
use eframe::egui;
use zip_extractor::events::ProgressChannel;

impl App {
    /// Отобразить окно прогресса
    pub fn render_progress_modal(&mut self, ctx: &egui::Context) {
        if !self.modal_visible() {
            return;
        }
        let Some(active) = &self.active else {
            return;
        };

        let t = self.t();
        let title = match active.channel {
            ProgressChannel::ExtractProgress => t.extracting,
            ProgressChannel::DownloadProgress => t.downloading,
        };
        let cancelling = active.cancelling;
        let progress = self.progress;

        // Затемняем панели (они на слое Background), окно прогресса выше
        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::new(
            egui::Order::PanelResizeLine,
            egui::Id::new("progress_modal_dim"),
        ))
        .rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(120));

        let mut cancel_clicked = false;
        egui::Window::new(title)
            .id(egui::Id::new("progress_modal"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.add_space(10.0);

                ui.add(
                    egui::ProgressBar::new(f32::from(progress) / 100.0)
                        .text(format!("{}%", progress))
                        .animate(true),
                );

                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if cancelling {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(egui::RichText::new(t.cancelling).color(egui::Color32::YELLOW));
                        });
                    } else if ui.button(t.cancel).clicked() {
                        cancel_clicked = true;
                    }
                });
            });

        if cancel_clicked {
            self.cancel();
        }
    }
}
