use crate::app::commands::AppCommand;
use crate::app::state::AppState;

pub struct CommandHandler;

impl CommandHandler {
    pub fn execute(app_state: &mut AppState, cmd: AppCommand) {
        match cmd {
            AppCommand::CreateGrid(w, h) => app_state.create_grid(w, h),
            AppCommand::CreateGridFromInput => app_state.create_grid_from_input(),
            AppCommand::SelectTool(mode) => app_state.set_tool(mode),
            AppCommand::SelectSwatch(idx) => {
                app_state.engine.select_swatch(idx);
            }
            AppCommand::SetSelectedColor(color) => app_state.engine.set_selected_color(color),
            AppCommand::ToggleGridLines => app_state.view.toggle_grid_lines(),
            AppCommand::Undo => app_state.undo(),
            AppCommand::Replay => app_state.replay(),
            AppCommand::ExportPng => app_state.export_png(),
            AppCommand::ExportPngTo(path) => app_state.export_png_to(path),
            AppCommand::SetLanguage(lang) => {
                rust_i18n::set_locale(&lang);
                app_state.ui.language = lang;
            }
            // 窗口命令由事件循环处理
            AppCommand::WindowClose => {}
        }
    }

    /// Drains the queue. Returns `true` if a `WindowClose` was seen.
    pub fn execute_all(app_state: &mut AppState) -> bool {
        let mut close = false;
        while let Some(cmd) = app_state.pop_command() {
            match cmd {
                AppCommand::WindowClose => close = true,
                _ => Self::execute(app_state, cmd),
            }
        }
        close
    }
}
