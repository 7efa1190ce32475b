use egui::{Ui, Color32, Sense, vec2, Stroke, RichText};
use crate::app::state::AppState;
use crate::app::commands::AppCommand;
use crate::core::color::Color;
use rust_i18n::t;

pub struct PalettePanel;

impl PalettePanel {
    pub fn show(ui: &mut Ui, app: &mut AppState) {
        ui.vertical(|ui| {
            ui.label(RichText::new(t!("palette.title")).strong().size(14.0));
            ui.add_space(4.0);

            let selected = app.engine.selected_color();
            let mut color_arr = [selected.r, selected.g, selected.b];

            ui.horizontal(|ui| {
                if ui.color_edit_button_srgb(&mut color_arr).changed() {
                    let new_color = Color::rgb(color_arr[0], color_arr[1], color_arr[2]);
                    app.enqueue_command(AppCommand::SetSelectedColor(new_color));
                }
                // 当前颜色提示
                ui.label(RichText::new(selected.to_hex()).monospace().size(11.0).color(Color32::LIGHT_GRAY))
                    .on_hover_text(t!("palette.custom"));
            });

            ui.separator();

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = vec2(4.0, 4.0);

                let active = app.engine.palette().active_index;
                let colors = app.engine.palette().colors.clone();

                for (i, color) in colors.into_iter().enumerate() {
                    let egui_color = Color32::from_rgb(color.r, color.g, color.b);
                    let (rect, response) = ui.allocate_exact_size(vec2(20.0, 20.0), Sense::click());

                    let stroke = if active == Some(i) {
                        Stroke::new(2.0, Color32::BLACK)
                    } else if response.hovered() {
                        Stroke::new(1.0, Color32::LIGHT_GRAY)
                    } else {
                        Stroke::new(1.0, Color32::DARK_GRAY)
                    };

                    ui.painter().rect_filled(rect, 2.0, egui_color);
                    ui.painter().rect_stroke(rect, 2.0, stroke);

                    if response.on_hover_text(color.to_hex()).clicked() {
                        app.enqueue_command(AppCommand::SelectSwatch(i));
                    }
                }
            });
        });
    }
}
