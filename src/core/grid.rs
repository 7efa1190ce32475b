use super::color::Color;
use crate::core::error::{CoreError, Result};

/// Row-major cell storage. `cells.len() == width * height` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Color>,
}

impl Grid {
    /// A blank (all white) grid. Dimensions are validated by the caller,
    /// see [`Grid::validate_dimensions`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Color::white(); width as usize * height as usize],
        }
    }

    pub fn validate_dimensions(width: u32, height: u32, max: u32) -> Result<()> {
        if width == 0 || height == 0 || width > max || height > max {
            return Err(CoreError::InvalidDimensions { width, height, max });
        }
        Ok(())
    }

    /// 解析输入框里的尺寸文本
    pub fn parse_dimension(text: &str) -> Result<u32> {
        text.trim()
            .parse::<u32>()
            .map_err(|_| CoreError::InvalidDimensionInput(text.to_string()))
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
    pub fn cells(&self) -> &[Color] { &self.cells }

    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height { return None; }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.cells.get(index).copied()
    }

    pub fn get_xy(&self, x: u32, y: u32) -> Option<Color> {
        self.index_of(x, y).and_then(|i| self.get(i))
    }

    pub fn set(&mut self, index: usize, color: Color) -> Result<()> {
        let len = self.cells.len();
        let cell = self.cells.get_mut(index).ok_or(CoreError::OutOfBounds { index, len })?;
        *cell = color;
        Ok(())
    }

    /// Overwrites cells by index from `source`. Extra source entries are
    /// ignored and missing ones leave the cell as it is, so a snapshot from
    /// another grid size cannot break the length invariant.
    pub fn restore_from(&mut self, source: &[Color]) {
        for (cell, color) in self.cells.iter_mut().zip(source.iter()) {
            *cell = *color;
        }
    }
}
