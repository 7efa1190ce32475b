use crate::app::view_state::ViewState;
use crate::core::grid::Grid;
use rayon::prelude::*;

pub const GRID_LINE_COLOR: [u8; 4] = [0xdd, 0xdd, 0xdd, 255];
pub const BACKGROUND_COLOR: [u8; 4] = [30, 30, 30, 255];

/// Grid lines need room inside a cell; below this size they are skipped.
const MIN_CELL_FOR_LINES: u32 = 3;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub screen_width: u32,
    pub screen_height: u32,
    pub origin_x: i64,
    pub origin_y: i64,
    pub cell_size: u32,
    pub show_grid_lines: bool,
}

impl Viewport {
    pub fn from_view(view: &ViewState, grid: &Grid, screen_width: u32, screen_height: u32) -> Self {
        let (origin_x, origin_y) = view.grid_origin(grid);
        Self {
            screen_width,
            screen_height,
            origin_x,
            origin_y,
            cell_size: view.cell_size.max(1),
            show_grid_lines: view.show_grid_lines,
        }
    }
}

pub struct Compositor;

impl Compositor {
    /// Color of pixel (`px`, `py`) of the grid drawn at `cell_size` pixels per
    /// cell, or `None` outside the grid. Lines sit on each cell's right and
    /// bottom edge.
    pub fn grid_pixel(grid: &Grid, cell_size: u32, show_grid_lines: bool, px: u32, py: u32) -> Option<[u8; 4]> {
        let cs = cell_size.max(1);
        let color = grid.get_xy(px / cs, py / cs)?;
        if show_grid_lines && cs >= MIN_CELL_FOR_LINES && (px % cs == cs - 1 || py % cs == cs - 1) {
            return Some(GRID_LINE_COLOR);
        }
        Some(color.to_rgba())
    }

    pub fn render(grid: &Grid, frame: &mut [u8], view: Viewport) {
        let stride = view.screen_width as usize * 4;
        if stride == 0 { return; }

        frame.par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y_idx, row)| {
                let ly = y_idx as i64 - view.origin_y;
                for x in 0..view.screen_width {
                    let lx = x as i64 - view.origin_x;
                    let idx = x as usize * 4;
                    let px = if lx >= 0 && ly >= 0 && lx <= u32::MAX as i64 && ly <= u32::MAX as i64 {
                        Self::grid_pixel(grid, view.cell_size, view.show_grid_lines, lx as u32, ly as u32)
                    } else {
                        None
                    };
                    row[idx..idx + 4].copy_from_slice(&px.unwrap_or(BACKGROUND_COLOR));
                }
            });
    }
}
