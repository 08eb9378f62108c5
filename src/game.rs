use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::apple::{Apple, ApplePlacement};
use crate::grid::Grid;
use crate::input::Direction;
use crate::snake::{Collision, Snake, TailRule};

/// High-level lifecycle state of one arena.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionState {
    Idle,
    Running,
    GameOver,
}

/// Tunable collision and placement behavior.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Rules {
    pub tail_rule: TailRule,
    pub apple_placement: ApplePlacement,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The arena was not running; nothing changed.
    Skipped,
    Moved,
    Consumed,
    GameOver(Collision),
}

/// Complete mutable simulation state for one arena.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub score: u32,
    pub tick_count: u64,
    pub status: SessionState,
    pub death_reason: Option<Collision>,
    grid: Grid,
    rules: Rules,
    rng: StdRng,
}

impl GameState {
    /// Creates an idle arena seeded from OS entropy.
    #[must_use]
    pub fn new(grid: Grid, rules: Rules) -> Self {
        Self::with_rng(grid, rules, StdRng::from_entropy())
    }

    /// Creates a deterministic idle arena for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: Grid, rules: Rules, seed: u64) -> Self {
        Self::with_rng(grid, rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, rules: Rules, mut rng: StdRng) -> Self {
        let apple = Apple::initial(&mut rng, grid);

        Self {
            snake: Snake::new(),
            apple,
            score: 0,
            tick_count: 0,
            status: SessionState::Idle,
            death_reason: None,
            grid,
            rules,
            rng,
        }
    }

    /// Puts snake, apple and score back to their start values and marks the
    /// arena as idle. The random stream continues.
    pub fn reset(&mut self) {
        self.snake = Snake::new();
        self.apple = Apple::initial(&mut self.rng, self.grid);
        self.score = 0;
        self.tick_count = 0;
        self.death_reason = None;
        self.status = SessionState::Idle;
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != SessionState::Running {
            return TickOutcome::Skipped;
        }

        self.tick_count += 1;
        let step = self
            .snake
            .advance(self.grid, self.apple.position, self.rules.tail_rule);

        if let Some(collision) = step.collision {
            self.status = SessionState::GameOver;
            self.death_reason = Some(collision);
            return TickOutcome::GameOver(collision);
        }

        if step.consumed {
            self.score += 1;
            self.apple.relocate_with(
                &mut self.rng,
                self.grid,
                &self.snake,
                self.rules.apple_placement,
            );
            debug!(
                "apple eaten at tick {}, score {}, next apple at ({}, {})",
                self.tick_count, self.score, self.apple.position.col, self.apple.position.row
            );
            return TickOutcome::Consumed;
        }

        TickOutcome::Moved
    }

    /// Latches a direction change. Ignored unless the arena is running or the
    /// change would reverse the snake.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.status != SessionState::Running {
            return false;
        }

        let accepted = self.snake.set_pending_direction(direction);
        if !accepted {
            debug!(
                "ignored {direction:?} while heading {:?}",
                self.snake.direction()
            );
        }
        accepted
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }
}
