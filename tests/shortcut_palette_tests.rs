use pixart::app::command_handler::CommandHandler;
use pixart::app::commands::AppCommand;
use pixart::app::config::EditorConfig;
use pixart::app::state::AppState;
use pixart::core::color::Color;
use pixart::core::palette::DEFAULT_COLORS;
use pixart::tools::brush::{PointerButton, ToolMode};

fn setup_app() -> AppState {
    let mut app = AppState::default();
    app.create_grid(4, 4);
    app
}

fn type_key(app: &mut AppState, key: &str) {
    app.on_text_input(key);
    CommandHandler::execute_all(app);
}

#[test]
fn test_tool_shortcuts_case_insensitive() {
    let mut app = setup_app();
    type_key(&mut app, "e");
    assert_eq!(app.engine.tool_mode(), ToolMode::Eraser);
    type_key(&mut app, "B");
    assert_eq!(app.engine.tool_mode(), ToolMode::Brush);
    type_key(&mut app, "E");
    assert_eq!(app.engine.tool_mode(), ToolMode::Eraser);
}

#[test]
fn test_g_toggles_grid_lines() {
    let mut app = setup_app();
    assert!(app.view.show_grid_lines, "网格线默认开启");
    type_key(&mut app, "g");
    assert!(!app.view.show_grid_lines);
    type_key(&mut app, "g");
    assert!(app.view.show_grid_lines);
}

#[test]
fn test_z_undoes_last_stroke() {
    let mut app = setup_app();
    app.on_pointer_down(5, PointerButton::Primary);
    app.on_pointer_up();
    assert_eq!(app.engine.grid().get(5), Some(Color::black()));

    type_key(&mut app, "z");
    assert_eq!(app.engine.grid().get(5), Some(Color::white()));
    assert_eq!(app.engine.history().len(), 1);
}

#[test]
fn test_shortcuts_ignored_while_text_field_focused() {
    let mut app = setup_app();
    app.ui.text_input_focused = true;
    type_key(&mut app, "e");
    type_key(&mut app, "g");
    assert_eq!(app.engine.tool_mode(), ToolMode::Brush);
    assert!(app.view.show_grid_lines);
    assert!(app.command_queue.is_empty());
}

#[test]
fn test_unbound_key_does_nothing() {
    let mut app = setup_app();
    type_key(&mut app, "q");
    assert!(app.command_queue.is_empty());
    assert_eq!(app.engine.tool_mode(), ToolMode::Brush);
}

#[test]
fn test_config_overrides_shortcuts() {
    let config = EditorConfig::from_json_str(r#"{ "shortcuts": { "r": "replay", "x": "eraser" } }"#)
    .unwrap();
    let mut app = AppState::new(config);
    app.on_pointer_down(0, PointerButton::Primary);
    app.on_pointer_up();

    type_key(&mut app, "x");
    assert_eq!(app.engine.tool_mode(), ToolMode::Eraser);
    type_key(&mut app, "r");
    assert!(app.engine.is_replaying(), "r 应触发回放");
}

#[test]
fn test_swatch_selection_switches_to_brush() {
    let mut app = setup_app();
    app.set_tool(ToolMode::Eraser);
    app.enqueue_command(AppCommand::SelectSwatch(3));
    CommandHandler::execute_all(&mut app);

    assert_eq!(app.engine.tool_mode(), ToolMode::Brush);
    assert_eq!(app.engine.selected_color(), DEFAULT_COLORS[3]);
    assert_eq!(app.engine.palette().active_index, Some(3));

    app.on_pointer_down(0, PointerButton::Primary);
    app.on_pointer_up();
    assert_eq!(app.engine.grid().get(0), Some(Color::rgb(0xff, 0, 0)));
}

#[test]
fn test_custom_color_clears_active_swatch() {
    let mut app = setup_app();
    app.enqueue_command(AppCommand::SelectSwatch(1));
    app.enqueue_command(AppCommand::SetSelectedColor(Color::rgb(0x12, 0x34, 0x56)));
    CommandHandler::execute_all(&mut app);

    assert_eq!(app.engine.palette().active_index, None);
    assert_eq!(app.engine.selected_color().to_hex(), "#123456");
}

#[test]
fn test_out_of_range_swatch_ignored() {
    let mut app = setup_app();
    app.enqueue_command(AppCommand::SelectSwatch(DEFAULT_COLORS.len()));
    CommandHandler::execute_all(&mut app);
    assert_eq!(app.engine.selected_color(), Color::black());
    assert_eq!(app.engine.palette().active_index, None);
}

#[test]
fn test_tool_and_color_changes_allowed_during_replay() {
    let mut app = setup_app();
    app.on_pointer_down(0, PointerButton::Primary);
    app.on_pointer_up();
    app.replay();
    assert!(app.engine.is_replaying());

    type_key(&mut app, "e");
    type_key(&mut app, "g");
    assert_eq!(app.engine.tool_mode(), ToolMode::Eraser);
    assert!(!app.view.show_grid_lines);
}

#[test]
fn test_window_close_reported_by_execute_all() {
    let mut app = setup_app();
    app.enqueue_command(AppCommand::ToggleGridLines);
    app.enqueue_command(AppCommand::WindowClose);
    assert!(CommandHandler::execute_all(&mut app));
    assert!(!app.view.show_grid_lines);
}
