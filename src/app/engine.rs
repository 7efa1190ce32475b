use crate::app::config::EditorConfig;
use crate::app::events::{EngineEffect, InputEvent};
use crate::core::color::Color;
use crate::core::error::Result;
use crate::core::grid::Grid;
use crate::core::palette::Palette;
use crate::history::manager::HistoryManager;
use crate::history::replay::Replay;
use crate::tools::brush::{BrushTool, PointerButton, ToolMode};
use std::time::Duration;

/// Owns the document: grid, history, tool state and the running replay.
/// Every mutation of the grid goes through here.
pub struct PixArtEngine {
    grid: Grid,
    history: HistoryManager,
    brush: BrushTool,
    tool_mode: ToolMode,
    selected_color: Color,
    palette: Palette,
    replay: Option<Replay>,
    max_dimension: u32,
    replay_interval: Duration,
}

impl PixArtEngine {
    pub fn new(config: &EditorConfig) -> Self {
        let mut engine = Self {
            grid: Grid::new(1, 1),
            history: HistoryManager::new(config.history_capacity),
            brush: BrushTool::new(),
            tool_mode: ToolMode::Brush,
            selected_color: Color::black(),
            palette: Palette::new(),
            replay: None,
            max_dimension: config.max_dimension,
            replay_interval: Duration::from_millis(config.replay_interval_ms),
        };
        if let Err(e) = engine.reset_grid(config.default_width, config.default_height) {
            log::warn!("default grid rejected ({}), falling back to 1x1", e);
            engine.history.push_snapshot(&engine.grid);
        }
        engine
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn history(&self) -> &HistoryManager { &self.history }
    pub fn tool_mode(&self) -> ToolMode { self.tool_mode }
    pub fn selected_color(&self) -> Color { self.selected_color }
    pub fn palette(&self) -> &Palette { &self.palette }
    pub fn max_dimension(&self) -> u32 { self.max_dimension }
    pub fn is_drawing(&self) -> bool { self.brush.is_drawing() }
    pub fn is_replaying(&self) -> bool { self.replay.is_some() }
    pub fn replay(&self) -> Option<&Replay> { self.replay.as_ref() }

    fn reset_grid(&mut self, width: u32, height: u32) -> Result<()> {
        Grid::validate_dimensions(width, height, self.max_dimension)?;
        self.grid = Grid::new(width, height);
        self.brush.end_stroke();
        self.history.clear();
        self.history.push_snapshot(&self.grid);
        log::info!("created {}x{} grid", width, height);
        Ok(())
    }

    /// Replaces the grid and its history. Rejected dimensions leave both as they were.
    pub fn create_grid(&mut self, width: u32, height: u32) -> EngineEffect {
        if self.blocked_by_replay("create grid") { return EngineEffect::Busy; }
        match self.reset_grid(width, height) {
            Ok(()) => EngineEffect::RedrawCanvas,
            Err(e) => EngineEffect::Error(e),
        }
    }

    pub fn set_tool(&mut self, mode: ToolMode) {
        self.tool_mode = mode;
    }

    pub fn set_selected_color(&mut self, color: Color) {
        self.selected_color = color;
        self.palette.clear_active();
    }

    /// Picks a palette swatch; also switches back to the brush.
    pub fn select_swatch(&mut self, index: usize) -> bool {
        match self.palette.select(index) {
            Some(color) => {
                self.selected_color = color;
                self.tool_mode = ToolMode::Brush;
                true
            }
            None => false,
        }
    }

    pub fn undo(&mut self) -> EngineEffect {
        if self.blocked_by_replay("undo") { return EngineEffect::Busy; }
        if self.history.undo(&mut self.grid) {
            log::debug!("undo, {} snapshot(s) left", self.history.len());
            EngineEffect::RedrawCanvas
        } else {
            EngineEffect::None
        }
    }

    pub fn start_replay(&mut self) -> EngineEffect {
        if self.blocked_by_replay("replay") { return EngineEffect::Busy; }
        // 回放期间禁止编辑，先结束进行中的笔画
        self.brush.end_stroke();
        match Replay::start(&self.history, &self.grid, self.replay_interval) {
            Some(replay) => {
                log::info!("replaying {} snapshot(s)", replay.frame_count());
                self.replay = Some(replay);
                EngineEffect::None
            }
            None => EngineEffect::None,
        }
    }

    /// Frame-loop hook. Advances a running replay by `delta`.
    pub fn tick(&mut self, delta: Duration) -> EngineEffect {
        let replay = match self.replay.as_mut() {
            Some(r) => r,
            None => return EngineEffect::None,
        };
        let rendered = replay.tick(delta, &mut self.grid);
        if replay.is_finished() {
            self.replay = None;
            log::info!("replay finished");
        }
        if rendered > 0 { EngineEffect::RedrawCanvas } else { EngineEffect::None }
    }

    pub fn handle_input(&mut self, event: InputEvent) -> EngineEffect {
        match event {
            InputEvent::PointerDown { index, button } => self.begin_stroke(index, button),
            InputEvent::PointerEnter { index } => {
                if !self.brush.is_drawing() { return EngineEffect::None; }
                self.paint_current(index)
            }
            InputEvent::PointerUp => {
                if self.brush.end_stroke() {
                    log::debug!("stroke ended");
                }
                EngineEffect::None
            }
        }
    }

    fn begin_stroke(&mut self, index: usize, button: PointerButton) -> EngineEffect {
        if self.blocked_by_replay("stroke") { return EngineEffect::Busy; }
        if self.brush.is_drawing() { return EngineEffect::None; }
        if index >= self.grid.len() {
            return EngineEffect::Error(crate::core::error::CoreError::OutOfBounds { index, len: self.grid.len() });
        }
        self.brush.begin_stroke(button);
        self.history.push_snapshot(&self.grid);
        log::debug!("stroke started at cell {} ({:?})", index, button);
        self.paint_current(index)
    }

    fn paint_current(&mut self, index: usize) -> EngineEffect {
        match self.brush.paint_at(index, &mut self.grid, self.tool_mode, self.selected_color) {
            Ok(Some(_)) => EngineEffect::RedrawCanvas,
            Ok(None) => EngineEffect::None,
            Err(e) => EngineEffect::Error(e),
        }
    }

    fn blocked_by_replay(&self, what: &str) -> bool {
        if self.replay.is_some() {
            log::debug!("{} ignored while replay is running", what);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PixArtEngine {
        PixArtEngine::new(&EditorConfig::default())
    }

    fn stroke(e: &mut PixArtEngine, index: usize) {
        e.handle_input(InputEvent::PointerDown { index, button: PointerButton::Primary });
        e.handle_input(InputEvent::PointerUp);
    }

    #[test]
    fn test_engine_starts_with_default_grid() {
        let e = engine();
        assert_eq!((e.grid().width(), e.grid().height()), (16, 16));
        assert_eq!(e.history().len(), 1);
        assert_eq!(e.tool_mode(), ToolMode::Brush);
    }

    #[test]
    fn test_create_grid_rejects_bad_dimensions() {
        let mut e = engine();
        stroke(&mut e, 0);
        let effect = e.create_grid(0, 4);
        assert!(matches!(effect, EngineEffect::Error(_)));
        assert_eq!(e.grid().len(), 256);
        assert_eq!(e.history().len(), 2, "被拒绝的尺寸不应清空历史");
    }

    #[test]
    fn test_stroke_pushes_one_snapshot() {
        let mut e = engine();
        e.create_grid(4, 1);
        e.handle_input(InputEvent::PointerDown { index: 0, button: PointerButton::Primary });
        e.handle_input(InputEvent::PointerEnter { index: 1 });
        e.handle_input(InputEvent::PointerEnter { index: 2 });
        e.handle_input(InputEvent::PointerUp);
        assert_eq!(e.history().len(), 2);
        assert_eq!(e.grid().get(2), Some(Color::black()));
        assert_eq!(e.grid().get(3), Some(Color::white()));
    }

    #[test]
    fn test_enter_without_press_does_nothing() {
        let mut e = engine();
        assert_eq!(e.handle_input(InputEvent::PointerEnter { index: 0 }), EngineEffect::None);
        assert_eq!(e.grid().get(0), Some(Color::white()));
    }

    #[test]
    fn test_pointer_down_out_of_range_keeps_history() {
        let mut e = engine();
        e.create_grid(2, 2);
        let effect = e.handle_input(InputEvent::PointerDown { index: 9, button: PointerButton::Primary });
        assert!(matches!(effect, EngineEffect::Error(_)));
        assert_eq!(e.history().len(), 1);
        assert!(!e.is_drawing());
    }

    #[test]
    fn test_select_swatch_switches_to_brush() {
        let mut e = engine();
        e.set_tool(ToolMode::Eraser);
        assert!(e.select_swatch(3));
        assert_eq!(e.tool_mode(), ToolMode::Brush);
        assert_eq!(e.selected_color(), Color::rgb(255, 0, 0));
        e.set_selected_color(Color::rgb(1, 2, 3));
        assert_eq!(e.palette().active_index, None);
    }

    #[test]
    fn test_replay_blocks_editing() {
        let mut e = engine();
        e.create_grid(2, 2);
        stroke(&mut e, 0);
        e.start_replay();
        assert!(e.is_replaying());

        assert_eq!(e.handle_input(InputEvent::PointerDown { index: 1, button: PointerButton::Primary }), EngineEffect::Busy);
        assert_eq!(e.undo(), EngineEffect::Busy);
        assert_eq!(e.create_grid(3, 3), EngineEffect::Busy);
        assert_eq!(e.start_replay(), EngineEffect::Busy);
        assert_eq!(e.history().len(), 2);

        e.tick(Duration::from_secs(5));
        assert!(!e.is_replaying());
        assert_eq!(e.grid().get(0), Some(Color::black()));
        assert_eq!(e.undo(), EngineEffect::RedrawCanvas);
    }
}
