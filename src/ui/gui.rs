use crate::app::state::AppState;
use crate::tools::brush::PointerButton;
use crate::ui::toolbar::Toolbar;
use rust_i18n::t;

pub struct Gui;

impl Gui {
    pub fn new() -> Self { Self }

    pub fn ui(&mut self, ctx: &egui::Context, app: &mut AppState) {
        // 文本框获得焦点时屏蔽单键快捷键
        app.ui.text_input_focused = ctx.wants_keyboard_input();
        let texts: Vec<String> = ctx.input(|i| {
            i.events.iter().filter_map(|event| match event {
                egui::Event::Text(text) => Some(text.clone()),
                _ => None,
            }).collect()
        });
        for text in texts {
            app.on_text_input(&text);
        }

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        ctx.set_style(style);

        egui::SidePanel::left("toolbar").resizable(false).default_width(150.0).show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.add_space(8.0);
                Toolbar::show(ui, app);
            });
        });

        egui::CentralPanel::default().frame(egui::Frame::none()).show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let scale = ctx.pixels_per_point();

            let cell_at = |app: &AppState, pos: egui::Pos2| -> Option<usize> {
                app.view.screen_to_cell(app.engine.grid(), pos.x * scale, pos.y * scale)
            };

            let (primary_pressed, secondary_pressed, any_down, any_released, pos) = ctx.input(|i| (
                i.pointer.primary_pressed(),
                i.pointer.secondary_pressed(),
                i.pointer.any_down(),
                i.pointer.any_released(),
                i.pointer.interact_pos(),
            ));

            if response.hovered() && (primary_pressed || secondary_pressed) {
                let button = if secondary_pressed { PointerButton::Secondary } else { PointerButton::Primary };
                if let Some(index) = pos.and_then(|p| cell_at(app, p)) {
                    app.on_pointer_down(index, button);
                }
            } else if any_down && app.engine.is_drawing() {
                if let Some(index) = pos.and_then(|p| cell_at(app, p)) {
                    app.on_pointer_enter(index);
                }
            }

            if any_released && !any_down {
                app.on_pointer_up();
            }
        });

        if let Some(err_msg) = app.ui.error_message.clone() {
            egui::Window::new(t!("dialog.prompt"))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(&err_msg);
                    ui.add_space(10.0);
                    ui.vertical_centered(|ui| {
                        if ui.button(t!("dialog.confirm")).clicked() {
                            app.ui.error_message = None;
                        }
                    });
                });
        }
    }
}

impl Default for Gui {
    fn default() -> Self {
        Self::new()
    }
}
