use crate::core::error::{CoreError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#RRGGBB`，调色板提示和导出都用这个形式
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let raw = text.trim();
        let lower = raw.to_ascii_lowercase();

        if let Some(hex) = lower.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| CoreError::InvalidColor(raw.to_string()));
        }
        if let Some(body) = lower.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            return Self::parse_rgb_fn(body).ok_or_else(|| CoreError::InvalidColor(raw.to_string()));
        }
        Self::from_name(&lower).ok_or_else(|| CoreError::InvalidColor(raw.to_string()))
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() { return None; }
        match hex.len() {
            3 => {
                let mut parts = [0u8; 3];
                for (i, ch) in hex.chars().enumerate() {
                    let v = ch.to_digit(16)? as u8;
                    parts[i] = v * 17;
                }
                Some(Self::rgb(parts[0], parts[1], parts[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    fn parse_rgb_fn(body: &str) -> Option<Self> {
        let parts: Vec<u8> = body
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<std::result::Result<_, _>>()
            .ok()?;
        match parts.as_slice() {
            [r, g, b] => Some(Self::rgb(*r, *g, *b)),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let c = match name {
            "white" => Self::rgb(255, 255, 255),
            "black" => Self::rgb(0, 0, 0),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "red" => Self::rgb(255, 0, 0),
            "orange" => Self::rgb(255, 165, 0),
            "yellow" => Self::rgb(255, 255, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "purple" => Self::rgb(128, 0, 128),
            "hotpink" => Self::rgb(255, 105, 180),
            _ => return None,
        };
        Some(c)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
