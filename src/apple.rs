use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Where a new session places the apple when the grid allows it.
pub const START_APPLE: Cell = Cell::new(10, 10);

/// Policy used when the apple is relocated after being eaten.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplePlacement {
    /// Any interior cell, including ones covered by the snake.
    #[default]
    Anywhere,
    /// Interior cells not covered by the snake.
    AvoidSnake,
}

/// The single consumable target on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Cell,
}

impl Apple {
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Apple for a new session: the fixed start cell, or a random interior
    /// cell on grids too small to contain it.
    #[must_use]
    pub fn initial<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Self {
        if grid.is_interior(START_APPLE) {
            return Self::at(START_APPLE);
        }

        Self::at(grid.random_interior_cell(rng))
    }

    /// Moves the apple according to `placement`.
    pub fn relocate_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: Grid,
        snake: &Snake,
        placement: ApplePlacement,
    ) {
        match placement {
            ApplePlacement::Anywhere => self.relocate(rng, grid),
            ApplePlacement::AvoidSnake => self.relocate_avoiding(rng, grid, snake),
        }
    }

    /// Moves the apple to a uniformly random interior cell. The new cell may be
    /// under the snake's body.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: Grid) {
        self.position = grid.random_interior_cell(rng);
    }

    /// Moves the apple to a uniformly random interior cell the snake does not
    /// cover. Falls back to [`Apple::relocate`] when the snake fills the interior.
    pub fn relocate_avoiding<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: Grid, snake: &Snake) {
        if snake.len() >= grid.interior_cell_count() {
            self.relocate(rng, grid);
            return;
        }

        let free = grid
            .interior_cells()
            .filter(|cell| !snake.occupies(*cell))
            .choose(rng);

        match free {
            Some(cell) => self.position = cell,
            None => self.relocate(rng, grid),
        }
    }
}
