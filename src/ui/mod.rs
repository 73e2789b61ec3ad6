//! Модуль пользовательского интерфейса

mod download_view;
mod extract_view;
mod progress_modal;
mod widgets;

use crate::app::{App, Mode};
use eframe::egui;
use zip_extractor::i18n::Language;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Обрабатываем события
        self.process_events();

        // Обрабатываем результаты файловых диалогов
        self.process_dialog_results();

        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }

        // Перерисовка, пока идёт операция или открыт диалог
        if self.is_busy() || self.dialog_open {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        } else if self.notification.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }

        // Боковая панель
        self.render_sidebar(ctx);

        // Нижняя панель с логом (фиксированная высота)
        self.render_log_panel(ctx);

        // Основная панель (занимает оставшееся место)
        self.render_main_panel(ctx);

        // Модальное окно прогресса поверх всего
        self.render_progress_modal(ctx);
    }
}

impl App {
    fn render_sidebar(&mut self, ctx: &egui::Context) {
        let t = self.t();

        egui::SidePanel::left("mode_panel")
            .resizable(true)
            .min_width(120.0)
            .default_width(160.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.heading(t.mode_label);
                ui.add_space(10.0);

                ui.add_enabled_ui(!self.is_busy(), |ui| {
                    ui.selectable_value(&mut self.mode, Mode::Extract, format!("📦 {}", t.mode_extract));
                    ui.selectable_value(&mut self.mode, Mode::Download, format!("⬇ {}", t.mode_download));
                });

                ui.add_space(20.0);
                ui.separator();

                ui.add_space(10.0);
                ui.label(t.status);

                // Статус с автоматической прокруткой - занимает оставшееся место
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(&self.status_message);
                    });
            });
    }

    fn render_log_panel(&mut self, ctx: &egui::Context) {
        let t = self.t();

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .min_height(60.0)
            .default_height(100.0)
            .max_height(400.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(t.log);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(t.clear).clicked() {
                            self.log_messages.clear();
                        }
                    });
                });

                egui::ScrollArea::vertical()
                    .id_salt("log_scroll")
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for msg in &self.log_messages {
                            ui.label(msg);
                        }
                        if self.log_messages.is_empty() {
                            ui.colored_label(egui::Color32::GRAY, t.log_empty);
                        }
                    });
            });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Кнопки выбора языка вверху
            self.render_language_selector(ui);

            ui.separator();
            self.render_notification(ui);
            ui.add_space(5.0);

            match self.mode {
                Mode::Extract => self.render_extract_mode(ui),
                Mode::Download => self.render_download_mode(ui),
            }
        });
    }

    fn render_language_selector(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("🌐");
            for lang in Language::all() {
                let text = format!("{} {}", lang.flag(), lang.native_name());
                let selected = self.language == *lang;

                if ui.selectable_label(selected, text).clicked() && !selected {
                    self.set_language(*lang);
                }
            }
        });
    }
}
