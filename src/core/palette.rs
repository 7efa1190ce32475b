use crate::core::color::Color;

pub const DEFAULT_COLORS: [Color; 10] = [
    Color::rgb(0xff, 0xff, 0xff),
    Color::rgb(0x00, 0x00, 0x00),
    Color::rgb(0x80, 0x80, 0x80),
    Color::rgb(0xff, 0x00, 0x00),
    Color::rgb(0xff, 0xa5, 0x00),
    Color::rgb(0xff, 0xff, 0x00),
    Color::rgb(0x00, 0x80, 0x00),
    Color::rgb(0x00, 0x00, 0xff),
    Color::rgb(0x80, 0x00, 0x80),
    Color::rgb(0xff, 0x69, 0xb4),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub colors: Vec<Color>,
    pub active_index: Option<usize>,
}

impl Palette {
    pub fn new() -> Self {
        Self { colors: DEFAULT_COLORS.to_vec(), active_index: None }
    }

    /// Marks swatch `index` active and returns its color.
    pub fn select(&mut self, index: usize) -> Option<Color> {
        let color = *self.colors.get(index)?;
        self.active_index = Some(index);
        Some(color)
    }

    pub fn clear_active(&mut self) {
        self.active_index = None;
    }

    pub fn active_color(&self) -> Option<Color> {
        self.active_index.and_then(|i| self.colors.get(i).copied())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
