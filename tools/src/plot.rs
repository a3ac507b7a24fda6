use calcbrain::PlotFn;

const AXIS_X: char = '-';
const AXIS_Y: char = '|';
const ORIGIN: char = '+';
const POINT: char = '*';

/// Maps character cells to plot units. `origin` is the cell position of
/// (0, 0), which may lie outside the visible area after panning.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
    pub origin: (f64, f64),
    pub cells_per_unit: f64,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Viewport {
        let mut viewport = Viewport {
            width,
            height,
            origin: (0.0, 0.0),
            cells_per_unit: 10.0,
        };
        viewport.center();
        viewport
    }

    pub fn center(&mut self) {
        self.origin = ((self.width / 2) as f64, (self.height / 2) as f64);
    }

    /// Moves the origin by whole cells, positive `dy` moves it down.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.origin = (self.origin.0 + dx, self.origin.1 + dy);
    }

    pub fn zoom(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.cells_per_unit *= scale;
        } else {
            log::warn!("ignoring zoom by {}", scale);
        }
    }

    pub fn column_to_units(&self, column: usize) -> f64 {
        (column as f64 - self.origin.0) / self.cells_per_unit
    }

    /// Row showing `y`, if it's on screen.
    pub fn units_to_row(&self, y: f64) -> Option<usize> {
        let row = (self.origin.1 - y * self.cells_per_unit).round();
        if row.is_finite() && row >= 0.0 && (row as usize) < self.height {
            Some(row as usize)
        } else {
            None
        }
    }

    fn axis_cell(&self, coord: f64, limit: usize) -> Option<usize> {
        let cell = coord.round();
        if cell >= 0.0 && (cell as usize) < limit {
            Some(cell as usize)
        } else {
            None
        }
    }

    /// Draws axes and one sample of `f` per column, under a `title` line.
    pub fn render(&self, f: &PlotFn, title: &str) -> String {
        let mut grid = vec![vec![' '; self.width]; self.height];
        let axis_row = self.axis_cell(self.origin.1, self.height);
        let axis_col = self.axis_cell(self.origin.0, self.width);
        if let Some(row) = axis_row {
            grid[row].iter_mut().for_each(|cell| *cell = AXIS_X);
        }
        if let Some(col) = axis_col {
            grid.iter_mut().for_each(|line| line[col] = AXIS_Y);
        }
        if let (Some(row), Some(col)) = (axis_row, axis_col) {
            grid[row][col] = ORIGIN;
        }
        for col in 0..self.width {
            let y = f(self.column_to_units(col));
            if let Some(row) = self.units_to_row(y) {
                grid[row][col] = POINT;
            }
        }
        let mut out = format!("{:^width$}", title, width = self.width).trim_end().to_string();
        out.push('\n');
        for line in grid {
            out.push_str(line.iter().collect::<String>().trim_end());
            out.push('\n');
        }
        out
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(72, 21)
    }
}
