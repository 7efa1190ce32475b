use egui::{Ui, RichText};
use crate::app::state::AppState;
use crate::app::commands::AppCommand;
use crate::tools::brush::ToolMode;
use crate::ui::palette_panel::PalettePanel;
use rust_i18n::t;

pub struct Toolbar;

impl Toolbar {
    pub fn show(ui: &mut Ui, app: &mut AppState) {
        let replaying = app.engine.is_replaying();

        ui.label(RichText::new(t!("toolbar.size")).size(10.0).color(egui::Color32::GRAY));
        egui::Grid::new("grid_size")
            .num_columns(2)
            .spacing([6.0, 4.0])
            .show(ui, |ui| {
                ui.label(t!("toolbar.width"));
                ui.add(egui::TextEdit::singleline(&mut app.ui.width_input).desired_width(50.0));
                ui.end_row();
                ui.label(t!("toolbar.height"));
                ui.add(egui::TextEdit::singleline(&mut app.ui.height_input).desired_width(50.0));
                ui.end_row();
            });
        if ui.add_enabled(!replaying, egui::Button::new(t!("toolbar.create"))).clicked() {
            app.enqueue_command(AppCommand::CreateGridFromInput);
        }

        ui.separator();
        ui.label(RichText::new(t!("toolbar.tools")).size(10.0).color(egui::Color32::GRAY));
        ui.horizontal(|ui| {
            Self::tool_btn(ui, app, ToolMode::Brush, &t!("tool.brush"), "B");
            Self::tool_btn(ui, app, ToolMode::Eraser, &t!("tool.eraser"), "E");
        });

        ui.separator();
        PalettePanel::show(ui, app);
        ui.separator();

        let mut show_lines = app.view.show_grid_lines;
        if ui.checkbox(&mut show_lines, t!("toolbar.grid_lines")).on_hover_text("G").changed() {
            app.enqueue_command(AppCommand::ToggleGridLines);
        }

        ui.label(format!("{}: {}px", t!("toolbar.zoom"), app.view.cell_size));
        if ui.add(egui::Slider::new(&mut app.view.cell_size, 2..=40).show_value(false)).changed() {
            app.view.needs_full_redraw = true;
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(!replaying, egui::Button::new(t!("toolbar.undo"))).on_hover_text("Z").clicked() {
                app.enqueue_command(AppCommand::Undo);
            }
            if ui.add_enabled(!replaying, egui::Button::new(t!("toolbar.replay"))).clicked() {
                app.enqueue_command(AppCommand::Replay);
            }
        });
        if ui.button(t!("toolbar.save")).clicked() {
            app.enqueue_command(AppCommand::ExportPng);
        }

        ui.add_space(6.0);
        let history = app.engine.history();
        ui.label(RichText::new(t!("toolbar.history", count = history.len(), max = history.max_steps())).size(10.0));
        if let Some(replay) = app.engine.replay() {
            ui.label(RichText::new(t!("toolbar.replaying", frame = replay.frame(), total = replay.frame_count())).size(10.0));
        }

        ui.separator();
        ui.label(RichText::new(t!("toolbar.language")).size(10.0).color(egui::Color32::GRAY));
        ui.horizontal(|ui| {
            for (code, name) in [("en", "English"), ("zh-CN", "简体中文")] {
                if ui.radio(app.ui.language == code, name).clicked() {
                    app.enqueue_command(AppCommand::SetLanguage(code.into()));
                }
            }
        });
    }

    fn tool_btn(ui: &mut Ui, app: &mut AppState, mode: ToolMode, name: &str, key: &str) {
        let selected = app.engine.tool_mode() == mode;
        if ui.selectable_label(selected, name).on_hover_text(key).clicked() {
            app.enqueue_command(AppCommand::SelectTool(mode));
        }
    }
}
