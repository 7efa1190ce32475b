use pixart::app::commands::AppCommand;
use pixart::app::command_handler::CommandHandler;
use pixart::app::io_service::{BOTTOM_PADDING, CAPTION_GAP, FRAME_PADDING};
use pixart::app::state::AppState;
use pixart::core::color::Color;
use pixart::render::caption::GLYPH_HEIGHT;
use pixart::tools::brush::PointerButton;
use std::path::PathBuf;

fn temp_png(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pixart_{}_{}.png", name, std::process::id()))
}

fn paint(app: &mut AppState, index: usize, color: Color) {
    app.engine.set_selected_color(color);
    app.on_pointer_down(index, PointerButton::Primary);
    app.on_pointer_up();
}

#[test]
fn test_export_png_layout_and_cells() {
    let mut app = AppState::default();
    app.create_grid(8, 6);
    paint(&mut app, 0, Color::rgb(255, 0, 0));
    paint(&mut app, 8 * 6 - 1, Color::rgb(0, 0, 255));
    app.enqueue_command(AppCommand::ToggleGridLines);

    let path = temp_png("layout");
    app.enqueue_command(AppCommand::ExportPngTo(path.clone()));
    CommandHandler::execute_all(&mut app);
    assert!(app.ui.error_message.is_none());

    let img = image::open(&path).expect("导出的 PNG 应可读取").to_rgba8();
    let _ = std::fs::remove_file(&path);

    let cs = app.config.cell_size;
    assert_eq!(img.width(), 8 * cs + FRAME_PADDING * 2);
    assert_eq!(img.height(), FRAME_PADDING + 6 * cs + CAPTION_GAP + GLYPH_HEIGHT + BOTTOM_PADDING);

    // 白色边框
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(img.width() - 1, 5).0, [255, 255, 255, 255]);

    let origin = FRAME_PADDING;
    assert_eq!(img.get_pixel(origin, origin).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(origin + cs - 1, origin + cs - 1).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(origin + cs, origin).0, [255, 255, 255, 255]);
    let last = (origin + 7 * cs + cs / 2, origin + 5 * cs + cs / 2);
    assert_eq!(img.get_pixel(last.0, last.1).0, [0, 0, 255, 255]);

    // 标题带里至少有黑色像素
    let band_top = origin + 6 * cs + CAPTION_GAP;
    let has_caption = (band_top..band_top + GLYPH_HEIGHT)
        .any(|y| (0..img.width()).any(|x| img.get_pixel(x, y).0 == [0, 0, 0, 255]));
    assert!(has_caption, "标题应绘制在底部");
}

#[test]
fn test_export_does_not_touch_document() {
    let mut app = AppState::default();
    app.create_grid(3, 3);
    paint(&mut app, 4, Color::rgb(0, 128, 0));
    let before = app.engine.grid().clone();
    let history_len = app.engine.history().len();

    let path = temp_png("untouched");
    app.export_png_to(path.clone());
    let _ = std::fs::remove_file(&path);

    assert_eq!(app.engine.grid(), &before);
    assert_eq!(app.engine.history().len(), history_len);
}

#[test]
fn test_export_failure_sets_error_message() {
    let mut app = AppState::default();
    let path = std::env::temp_dir().join("pixart_missing_dir_for_export").join("nested").join("out.png");
    app.export_png_to(path);
    assert!(app.ui.error_message.is_some());
}
