use crate::app::commands::AppCommand;
use crate::app::config::EditorConfig;
use crate::app::engine::PixArtEngine;
use crate::app::events::InputEvent;
use crate::app::input_handler::InputHandler;
use crate::app::io_service::{ExportOptions, IoService};
use crate::app::shortcut_manager::ShortcutManager;
use crate::app::ui_state::UiState;
use crate::app::view_state::ViewState;
use crate::core::grid::Grid;
use crate::tools::brush::{PointerButton, ToolMode};
use rust_i18n::t;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

pub struct AppState {
    pub engine: PixArtEngine,
    pub command_queue: VecDeque<AppCommand>,
    pub view: ViewState,
    pub ui: UiState,
    pub shortcuts: ShortcutManager,
    pub config: EditorConfig,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        let mut shortcuts = ShortcutManager::new();
        shortcuts.load_from_user_config(&config.shortcuts);
        let engine = PixArtEngine::new(&config);
        let ui = UiState::new(engine.grid().width(), engine.grid().height(), &config.locale);

        Self {
            engine,
            command_queue: VecDeque::new(),
            view: ViewState::new(config.cell_size),
            ui,
            shortcuts,
            config,
        }
    }

    pub fn enqueue_command(&mut self, cmd: AppCommand) {
        self.command_queue.push_back(cmd);
    }

    pub fn pop_command(&mut self) -> Option<AppCommand> {
        self.command_queue.pop_front()
    }

    pub fn set_tool(&mut self, mode: ToolMode) {
        self.engine.set_tool(mode);
    }

    pub fn on_pointer_down(&mut self, index: usize, button: PointerButton) {
        InputHandler::dispatch(self, InputEvent::PointerDown { index, button });
    }

    pub fn on_pointer_enter(&mut self, index: usize) {
        InputHandler::dispatch(self, InputEvent::PointerEnter { index });
    }

    pub fn on_pointer_up(&mut self) {
        InputHandler::dispatch(self, InputEvent::PointerUp);
    }

    /// Keyboard text from the host; routed through the shortcut table.
    pub fn on_text_input(&mut self, text: &str) {
        if let Some(cmd) = self.shortcuts.handle_text_input(text, self.ui.text_input_focused) {
            self.enqueue_command(cmd);
        }
    }

    pub fn undo(&mut self) {
        let effect = self.engine.undo();
        InputHandler::handle_engine_effect(self, effect);
    }

    pub fn replay(&mut self) {
        let effect = self.engine.start_replay();
        InputHandler::handle_engine_effect(self, effect);
    }

    pub fn tick(&mut self, delta: Duration) {
        let effect = self.engine.tick(delta);
        InputHandler::handle_engine_effect(self, effect);
    }

    pub fn create_grid(&mut self, width: u32, height: u32) {
        let effect = self.engine.create_grid(width, height);
        if effect.is_redraw() {
            self.ui.width_input = width.to_string();
            self.ui.height_input = height.to_string();
        }
        InputHandler::handle_engine_effect(self, effect);
    }

    pub fn create_grid_from_input(&mut self) {
        let parsed = Grid::parse_dimension(&self.ui.width_input)
            .and_then(|w| Grid::parse_dimension(&self.ui.height_input).map(|h| (w, h)));
        match parsed {
            Ok((w, h)) => self.create_grid(w, h),
            Err(e) => self.ui.error_message = Some(e.to_string()),
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            cell_size: self.config.cell_size,
            show_grid_lines: self.view.show_grid_lines,
            caption: self.config.caption.clone(),
        }
    }

    pub fn export_png(&mut self) {
        if let Some(path) = IoService::pick_export_path() {
            self.export_png_to(path);
        }
    }

    pub fn export_png_to(&mut self, path: PathBuf) {
        let options = self.export_options();
        match IoService::save_png(&path, self.engine.grid(), &options) {
            Ok(()) => log::info!("exported {}", path.display()),
            Err(e) => {
                log::error!("export to {} failed: {}", path.display(), e);
                self.ui.error_message = Some(t!("error.export_failed", err = e.to_string()));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
