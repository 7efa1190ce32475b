use rust_i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    InvalidDimensions { width: u32, height: u32, max: u32 },
    InvalidDimensionInput(String),
    OutOfBounds { index: usize, len: usize },
    InvalidColor(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::InvalidDimensions { width, height, max } => write!(
                f,
                "{}",
                t!("error.invalid_dimensions", width = width, height = height, max = max)
            ),
            CoreError::InvalidDimensionInput(text) => write!(f, "{}", t!("error.invalid_dimension_input", text = text)),
            CoreError::OutOfBounds { index, len } => write!(f, "{}", t!("error.out_of_bounds", index = index, len = len)),
            CoreError::InvalidColor(text) => write!(f, "{}", t!("error.invalid_color", text = text)),
        }
    }
}

impl std::error::Error for CoreError {}
pub type Result<T> = std::result::Result<T, CoreError>;
