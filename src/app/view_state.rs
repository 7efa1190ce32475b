use crate::core::grid::Grid;

/// Screen-side view of the canvas: viewport size, on-screen cell size and
/// grid-line visibility. The grid is drawn centred in the viewport.
pub struct ViewState {
    pub width: f32,
    pub height: f32,
    pub cell_size: u32,
    pub show_grid_lines: bool,
    pub needs_full_redraw: bool,
}

impl ViewState {
    pub fn new(cell_size: u32) -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            cell_size: cell_size.max(1),
            show_grid_lines: true,
            needs_full_redraw: true,
        }
    }

    pub fn update_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.needs_full_redraw = true;
    }

    pub fn toggle_grid_lines(&mut self) {
        self.show_grid_lines = !self.show_grid_lines;
        self.needs_full_redraw = true;
    }

    /// Top-left corner of the grid in screen pixels (may be negative).
    pub fn grid_origin(&self, grid: &Grid) -> (i64, i64) {
        let gw = grid.width() as i64 * self.cell_size as i64;
        let gh = grid.height() as i64 * self.cell_size as i64;
        ((self.width as i64 - gw) / 2, (self.height as i64 - gh) / 2)
    }

    pub fn screen_to_cell(&self, grid: &Grid, screen_x: f32, screen_y: f32) -> Option<usize> {
        let (ox, oy) = self.grid_origin(grid);
        let lx = screen_x.floor() as i64 - ox;
        let ly = screen_y.floor() as i64 - oy;
        if lx < 0 || ly < 0 { return None; }
        let cs = self.cell_size as i64;
        let (cx, cy) = (lx / cs, ly / cs);
        if cx > u32::MAX as i64 || cy > u32::MAX as i64 { return None; }
        grid.index_of(cx as u32, cy as u32)
    }
}
