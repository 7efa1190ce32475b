pub mod color;
pub mod error;
pub mod grid;
pub mod palette;
