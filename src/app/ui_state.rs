pub struct UiState {
    pub width_input: String,
    pub height_input: String,
    pub error_message: Option<String>,
    pub language: String,
    pub text_input_focused: bool,
}

impl UiState {
    pub fn new(width: u32, height: u32, language: &str) -> Self {
        Self {
            width_input: width.to_string(),
            height_input: height.to_string(),
            error_message: None,
            language: language.to_string(),
            text_input_focused: false,
        }
    }
}
