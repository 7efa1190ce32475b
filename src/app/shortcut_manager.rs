use crate::app::commands::AppCommand;
use crate::app::config::ShortcutAction;
use crate::tools::brush::ToolMode;
use std::collections::HashMap;

pub struct ShortcutManager {
    bindings: HashMap<String, AppCommand>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        let mut manager = Self { bindings: HashMap::new() };
        manager.load_default_shortcuts();
        manager
    }

    /// 绑定单个按键（不区分大小写）
    pub fn bind(&mut self, key: &str, cmd: AppCommand) {
        self.bindings.insert(key.to_lowercase(), cmd);
    }

    /// 用户配置覆盖默认绑定
    pub fn load_from_user_config(&mut self, shortcuts: &HashMap<String, ShortcutAction>) {
        for (key, action) in shortcuts {
            self.bind(key, Self::command_for(*action));
        }
    }

    fn command_for(action: ShortcutAction) -> AppCommand {
        match action {
            ShortcutAction::Brush => AppCommand::SelectTool(ToolMode::Brush),
            ShortcutAction::Eraser => AppCommand::SelectTool(ToolMode::Eraser),
            ShortcutAction::ToggleGrid => AppCommand::ToggleGridLines,
            ShortcutAction::Undo => AppCommand::Undo,
            ShortcutAction::Replay => AppCommand::Replay,
        }
    }

    fn load_default_shortcuts(&mut self) {
        self.bind("b", AppCommand::SelectTool(ToolMode::Brush));
        self.bind("e", AppCommand::SelectTool(ToolMode::Eraser));
        self.bind("g", AppCommand::ToggleGridLines);
        self.bind("z", AppCommand::Undo);
    }

    /// Maps typed text to a command. Nothing fires while a text field has focus.
    pub fn handle_text_input(&self, text: &str, text_input_focused: bool) -> Option<AppCommand> {
        if text_input_focused { return None; }
        self.bindings.get(&text.to_lowercase()).cloned()
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let m = ShortcutManager::new();
        assert_eq!(m.handle_text_input("b", false), Some(AppCommand::SelectTool(ToolMode::Brush)));
        assert_eq!(m.handle_text_input("E", false), Some(AppCommand::SelectTool(ToolMode::Eraser)));
        assert_eq!(m.handle_text_input("g", false), Some(AppCommand::ToggleGridLines));
        assert_eq!(m.handle_text_input("Z", false), Some(AppCommand::Undo));
        assert_eq!(m.handle_text_input("q", false), None);
    }

    #[test]
    fn test_suppressed_in_text_field() {
        let m = ShortcutManager::new();
        assert_eq!(m.handle_text_input("z", true), None);
    }

    #[test]
    fn test_user_config_overrides() {
        let mut m = ShortcutManager::new();
        let mut user = HashMap::new();
        user.insert("R".to_string(), ShortcutAction::Replay);
        user.insert("z".to_string(), ShortcutAction::ToggleGrid);
        m.load_from_user_config(&user);
        assert_eq!(m.handle_text_input("r", false), Some(AppCommand::Replay));
        assert_eq!(m.handle_text_input("z", false), Some(AppCommand::ToggleGridLines));
        assert_eq!(m.handle_text_input("b", false), Some(AppCommand::SelectTool(ToolMode::Brush)));
    }
}
