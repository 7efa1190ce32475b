use crate::core::color::Color;
use crate::core::error::Result;
use crate::core::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolMode {
    #[default]
    Brush,
    Eraser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// 橡皮擦或右键 → 白色，否则用当前颜色
pub fn paint_color(mode: ToolMode, is_secondary: bool, selected: Color) -> Color {
    if mode == ToolMode::Eraser || is_secondary {
        Color::white()
    } else {
        selected
    }
}

/// Writes the resolved color into cell `index` unconditionally.
pub fn paint(grid: &mut Grid, index: usize, mode: ToolMode, is_secondary: bool, selected: Color) -> Result<Color> {
    let color = paint_color(mode, is_secondary, selected);
    grid.set(index, color)?;
    Ok(color)
}

#[derive(Debug, Clone, Copy)]
struct Stroke {
    button: PointerButton,
    last_index: Option<usize>,
}

/// Tracks one press-drag-release stroke. Snapshotting is the engine's job;
/// the tool only decides which cells get painted and with what.
#[derive(Debug, Default)]
pub struct BrushTool {
    stroke: Option<Stroke>,
}

impl BrushTool {
    pub fn new() -> Self {
        Self { stroke: None }
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn button(&self) -> Option<PointerButton> {
        self.stroke.map(|s| s.button)
    }

    /// Returns `false` if a stroke is already in progress.
    pub fn begin_stroke(&mut self, button: PointerButton) -> bool {
        if self.stroke.is_some() { return false; }
        self.stroke = Some(Stroke { button, last_index: None });
        true
    }

    /// Paints `index` as part of the current stroke. Skips the cell the
    /// stroke last painted, returns `Ok(None)` when nothing was written.
    pub fn paint_at(&mut self, index: usize, grid: &mut Grid, mode: ToolMode, selected: Color) -> Result<Option<Color>> {
        let stroke = match self.stroke.as_mut() {
            Some(s) => s,
            None => return Ok(None),
        };
        if stroke.last_index == Some(index) { return Ok(None); }

        let color = paint(grid, index, mode, stroke.button == PointerButton::Secondary, selected)?;
        stroke.last_index = Some(index);
        Ok(Some(color))
    }

    /// Returns `true` if a stroke was open.
    pub fn end_stroke(&mut self) -> bool {
        self.stroke.take().is_some()
    }
}
