use crate::core::color::Color;
use crate::tools::brush::ToolMode;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    CreateGrid(u32, u32),
    /// Width/height as typed in the toolbar inputs.
    CreateGridFromInput,
    SelectTool(ToolMode),
    SelectSwatch(usize),
    SetSelectedColor(Color),
    ToggleGridLines,
    Undo,
    Replay,
    ExportPng,
    ExportPngTo(PathBuf),
    SetLanguage(String),
    WindowClose,
}
