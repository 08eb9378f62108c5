//! Session lifecycle: start, tick dispatch, game over and restart.
//!
//! A [`Session`] owns the [`GameState`] and its [`TickScheduler`]. Every state
//! change is reported synchronously to a [`SessionObserver`], which is where the
//! renderer, audio and UI controls hook in.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::audio::SoundCue;
use crate::error::SessionError;
use crate::game::{GameState, SessionState, TickOutcome};
use crate::grid::{Cell, Grid};
use crate::input::GameInput;
use crate::scheduler::TickScheduler;
use crate::snake::{Collision, Snake};

/// Read-only view handed to the render collaborator.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub snake: &'a Snake,
    pub apple: Cell,
    pub score: u32,
    pub status: SessionState,
    pub death_reason: Option<Collision>,
}

impl<'a> Snapshot<'a> {
    #[must_use]
    pub fn of(state: &'a GameState) -> Self {
        Self {
            grid: state.grid(),
            snake: &state.snake,
            apple: state.apple.position,
            score: state.score,
            status: state.status,
            death_reason: state.death_reason,
        }
    }
}

/// Receives session signals. All methods default to no-ops and must return
/// promptly; they run inside the tick.
pub trait SessionObserver {
    fn render(&mut self, _snapshot: &Snapshot<'_>) {}

    fn play(&mut self, _cue: SoundCue) {}

    /// Enables or disables the external start/restart control.
    fn start_control(&mut self, _enabled: bool) {}

    fn game_over(&mut self, _score: u32, _cause: Collision) {}
}

/// Observer that ignores every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {}

/// One arena plus the clock that drives it.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    scheduler: TickScheduler,
}

impl Session {
    /// Wraps an idle game state with a scheduler of the given period.
    #[must_use]
    pub fn new(state: GameState, tick_interval: Duration) -> Self {
        Self {
            state,
            scheduler: TickScheduler::new(tick_interval),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> SessionState {
        self.state.status
    }

    #[must_use]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Resets the arena and begins ticking. Valid from idle or game over.
    pub fn start(
        &mut self,
        now: Instant,
        observer: &mut impl SessionObserver,
    ) -> Result<(), SessionError> {
        if self.state.status == SessionState::Running {
            return Err(SessionError::AlreadyRunning);
        }

        self.state.reset();
        self.state.status = SessionState::Running;
        self.scheduler.start(now);
        info!(
            "session started on {}x{} grid, tick {:?}",
            self.state.grid().width(),
            self.state.grid().height(),
            self.scheduler.interval()
        );

        observer.start_control(false);
        observer.render(&Snapshot::of(&self.state));
        Ok(())
    }

    /// Returns a finished arena to idle without starting it.
    pub fn restart(&mut self, observer: &mut impl SessionObserver) -> Result<(), SessionError> {
        if self.state.status != SessionState::GameOver {
            return Err(SessionError::NotGameOver);
        }

        self.state.reset();
        debug!("session reset to idle");

        observer.start_control(true);
        observer.render(&Snapshot::of(&self.state));
        Ok(())
    }

    /// Routes one input event. Lifecycle commands that do not apply in the
    /// current state are ignored. Returns false when the input asks to quit.
    pub fn handle_input(
        &mut self,
        input: GameInput,
        now: Instant,
        observer: &mut impl SessionObserver,
    ) -> bool {
        let result = match input {
            GameInput::Quit => return false,
            GameInput::Direction(direction) => {
                self.state.steer(direction);
                Ok(())
            }
            GameInput::Start => self.start(now, observer),
            GameInput::Restart => self.restart(observer),
        };

        if let Err(error) = result {
            debug!("ignored {input:?}: {error}");
        }
        true
    }

    /// Runs a tick if the scheduler says one is due at `now`.
    pub fn poll(
        &mut self,
        now: Instant,
        observer: &mut impl SessionObserver,
    ) -> Option<TickOutcome> {
        if !self.scheduler.poll(now) {
            return None;
        }

        Some(self.step(observer))
    }

    /// Runs exactly one tick regardless of the clock and dispatches its signals.
    pub fn step(&mut self, observer: &mut impl SessionObserver) -> TickOutcome {
        let outcome = self.state.tick();

        match outcome {
            TickOutcome::Skipped => return outcome,
            TickOutcome::Moved => {}
            TickOutcome::Consumed => observer.play(SoundCue::Consume),
            TickOutcome::GameOver(cause) => {
                self.scheduler.stop();
                info!(
                    "game over after {} ticks: {cause:?}, score {}",
                    self.state.tick_count, self.state.score
                );
            }
        }

        observer.render(&Snapshot::of(&self.state));

        if let TickOutcome::GameOver(cause) = outcome {
            observer.play(SoundCue::GameOver);
            observer.start_control(true);
            observer.game_over(self.state.score, cause);
        }

        outcome
    }
}
