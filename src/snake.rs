use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid};
use crate::input::{Direction, direction_change_is_valid};

/// Segments of a freshly started snake, head first.
pub const START_SEGMENTS: [Cell; 3] = [Cell::new(7, 5), Cell::new(6, 5), Cell::new(5, 5)];

/// Direction of a freshly started snake.
pub const START_DIRECTION: Direction = Direction::Right;

/// What ended the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBody,
}

/// How the cell occupied by the tail is treated during the self-collision test.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailRule {
    /// The tail cell is about to be vacated on a non-growing step, so the head
    /// may move into it.
    #[default]
    Vacates,
    /// Every current segment blocks the head, tail included.
    Blocks,
}

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Advance {
    pub consumed: bool,
    pub collision: Option<Collision>,
}

impl Advance {
    #[must_use]
    pub fn collided(self) -> bool {
        self.collision.is_some()
    }
}

/// Mutable snake state: body, committed direction and latched input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
}

impl Default for Snake {
    fn default() -> Self {
        Self::from_segments(START_SEGMENTS.to_vec(), START_DIRECTION)
    }
}

impl Snake {
    /// Creates the canonical three-segment snake heading right.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Latches a direction for the next tick.
    ///
    /// Reversals are checked against the committed direction, so several inputs
    /// within one tick can never chain into a 180° turn. Returns whether the
    /// input was accepted.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.pending_direction = direction;
        true
    }

    /// Commits the pending direction and moves one cell.
    ///
    /// Collisions are detected before the body is touched; a colliding step
    /// leaves the segments exactly as they were.
    pub fn advance(&mut self, grid: Grid, target: Cell, tail_rule: TailRule) -> Advance {
        self.direction = self.pending_direction;
        let next_head = self.next_head_position();

        if grid.is_wall(next_head) || !grid.contains(next_head) {
            return Advance {
                consumed: false,
                collision: Some(Collision::Wall),
            };
        }

        let consumed = next_head == target;
        if self.blocks(next_head, consumed, tail_rule) {
            return Advance {
                consumed: false,
                collision: Some(Collision::SelfBody),
            };
        }

        self.body.push_front(next_head);
        if !consumed {
            let _ = self.body.pop_back();
        }

        Advance {
            consumed,
            collision: None,
        }
    }

    fn blocks(&self, cell: Cell, growing: bool, tail_rule: TailRule) -> bool {
        let checked = match tail_rule {
            TailRule::Vacates if !growing => self.body.len() - 1,
            _ => self.body.len(),
        };

        self.body
            .iter()
            .take(checked)
            .any(|segment| *segment == cell)
    }

    /// Returns the head position for the committed direction.
    #[must_use]
    pub fn next_head_position(&self) -> Cell {
        let head = self.head();
        let (d_col, d_row) = self.direction.offset();
        Cell {
            col: head.col + d_col,
            row: head.row + d_row,
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Cell> + ExactSizeIterator {
        self.body.iter()
    }
}
