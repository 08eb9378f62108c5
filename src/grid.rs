use rand::Rng;

use crate::error::ConfigError;

/// Smallest grid that holds the canonical start position inside the wall band
/// with room for its first move to the right.
pub const MIN_GRID_WIDTH: u16 = 10;
pub const MIN_GRID_HEIGHT: u16 = 7;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Fixed arena dimensions in cells. The outermost ring of cells is a wall.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Builds a grid from explicit cell counts.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width < MIN_GRID_WIDTH || height < MIN_GRID_HEIGHT {
            return Err(ConfigError::GridTooSmall {
                width,
                height,
                min_width: MIN_GRID_WIDTH,
                min_height: MIN_GRID_HEIGHT,
            });
        }

        Ok(Self { width, height })
    }

    /// Derives the grid from a canvas size in pixels and a cell edge length.
    ///
    /// Partial cells at the right and bottom edges are dropped.
    pub fn from_canvas(
        width_px: u32,
        height_px: u32,
        cell_size_px: u32,
    ) -> Result<Self, ConfigError> {
        if cell_size_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if width_px == 0 || height_px == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: width_px,
                height: height_px,
            });
        }

        let cols = width_px / cell_size_px;
        let rows = height_px / cell_size_px;
        let (Ok(width), Ok(height)) = (u16::try_from(cols), u16::try_from(rows)) else {
            return Err(ConfigError::GridTooLarge {
                width: cols,
                height: rows,
            });
        };

        Self::new(width, height)
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    /// Returns true when the cell lies anywhere on the grid, wall included.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && cell.col < i32::from(self.width)
            && cell.row < i32::from(self.height)
    }

    /// Returns true when the cell lies on the one-cell border band.
    #[must_use]
    pub fn is_wall(self, cell: Cell) -> bool {
        cell.col == 0 || cell.row == 0 || cell.col == self.last_col() || cell.row == self.last_row()
    }

    /// Returns true when the cell is strictly inside the wall band.
    #[must_use]
    pub fn is_interior(self, cell: Cell) -> bool {
        cell.col >= 1 && cell.row >= 1 && cell.col < self.last_col() && cell.row < self.last_row()
    }

    /// Number of cells strictly inside the wall band.
    #[must_use]
    pub fn interior_cell_count(self) -> usize {
        usize::from(self.width - 2) * usize::from(self.height - 2)
    }

    /// Draws a uniformly distributed cell strictly inside the wall band.
    pub fn random_interior_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        Cell {
            col: rng.gen_range(1..self.last_col()),
            row: rng.gen_range(1..self.last_row()),
        }
    }

    /// Iterates over interior cells in row-major order.
    pub fn interior_cells(self) -> impl Iterator<Item = Cell> {
        let (last_col, last_row) = (self.last_col(), self.last_row());
        (1..last_row).flat_map(move |row| (1..last_col).map(move |col| Cell { col, row }))
    }

    fn last_col(self) -> i32 {
        i32::from(self.width) - 1
    }

    fn last_row(self) -> i32 {
        i32::from(self.height) - 1
    }
}
