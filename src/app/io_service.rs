use crate::app::error::Result;
use crate::core::grid::Grid;
use crate::render::caption;
use crate::render::compositor::Compositor;
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

pub const FRAME_PADDING: u32 = 10;
pub const CAPTION_GAP: u32 = 10;
pub const BOTTOM_PADDING: u32 = 20;

const FRAME_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CAPTION_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub cell_size: u32,
    pub show_grid_lines: bool,
    pub caption: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { cell_size: 20, show_grid_lines: true, caption: "Made with PixArt".to_string() }
    }
}

pub struct IoService;

impl IoService {
    pub fn pick_export_path() -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_file_name("pixart.png")
            .add_filter("PNG", &["png"])
            .save_file()
    }

    /// Grid inside a white frame with the caption centred underneath.
    pub fn rasterize(grid: &Grid, options: &ExportOptions) -> RgbaImage {
        let cs = options.cell_size.max(1);
        let grid_w = grid.width() * cs;
        let grid_h = grid.height() * cs;
        let caption_w = caption::text_width(&options.caption);
        let content_w = grid_w.max(caption_w);

        let img_w = content_w + FRAME_PADDING * 2;
        let img_h = FRAME_PADDING + grid_h + CAPTION_GAP + caption::GLYPH_HEIGHT + BOTTOM_PADDING;
        let mut img = RgbaImage::from_pixel(img_w, img_h, FRAME_COLOR);

        let grid_x = FRAME_PADDING + (content_w - grid_w) / 2;
        let grid_y = FRAME_PADDING;
        for py in 0..grid_h {
            for px in 0..grid_w {
                if let Some(rgba) = Compositor::grid_pixel(grid, cs, options.show_grid_lines, px, py) {
                    img.put_pixel(grid_x + px, grid_y + py, Rgba(rgba));
                }
            }
        }

        let caption_x = FRAME_PADDING + (content_w - caption_w) / 2;
        let caption_y = grid_y + grid_h + CAPTION_GAP;
        caption::draw_text(&mut img, &options.caption, caption_x, caption_y, CAPTION_COLOR);
        img
    }

    pub fn save_png(path: &Path, grid: &Grid, options: &ExportOptions) -> Result<()> {
        let img = Self::rasterize(grid, options);
        img.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;

    #[test]
    fn test_rasterize_layout() {
        let mut g = Grid::new(2, 2);
        g.set(0, Color::rgb(255, 0, 0)).unwrap();
        let options = ExportOptions { show_grid_lines: false, ..ExportOptions::default() };
        let img = IoService::rasterize(&g, &options);

        // 标题比网格宽，网格水平居中
        assert_eq!(img.dimensions(), (95 + 20, 10 + 40 + 10 + 7 + 20));
        let grid_x = 10 + (95 - 40) / 2;
        assert_eq!(*img.get_pixel(grid_x, 10), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(grid_x + 20, 10), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(0, 0), FRAME_COLOR);
    }

    #[test]
    fn test_rasterize_wide_grid_without_caption() {
        let g = Grid::new(10, 1);
        let options = ExportOptions { cell_size: 20, show_grid_lines: true, caption: String::new() };
        let img = IoService::rasterize(&g, &options);
        assert_eq!(img.dimensions(), (220, 10 + 20 + 10 + 7 + 20));
        assert_eq!(*img.get_pixel(10 + 19, 10), Rgba(crate::render::compositor::GRID_LINE_COLOR));
    }

    #[test]
    fn test_rasterize_draws_caption() {
        let g = Grid::new(8, 8);
        let img = IoService::rasterize(&g, &ExportOptions::default());
        let caption_y = 10 + 160 + CAPTION_GAP;
        let dark = (caption_y..caption_y + 7)
            .flat_map(|y| (0..img.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| *img.get_pixel(x, y) == CAPTION_COLOR)
            .count();
        assert!(dark > 0, "标题应绘制黑色像素");
    }
}
