use std::time::{Duration, Instant};

use arena_snake::audio::SoundCue;
use arena_snake::game::{GameState, Rules, SessionState, TickOutcome};
use arena_snake::grid::{Cell, Grid};
use arena_snake::input::{Direction, GameInput};
use arena_snake::session::{Session, SessionObserver, Snapshot};
use arena_snake::snake::{Collision, START_SEGMENTS};

const PERIOD: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Signal {
    Render {
        head: Cell,
        len: usize,
        score: u32,
        status: SessionState,
    },
    Sound(SoundCue),
    StartControl(bool),
    GameOver(u32, Collision),
}

#[derive(Debug, Default)]
struct Recorder {
    signals: Vec<Signal>,
}

impl Recorder {
    fn take(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }
}

impl SessionObserver for Recorder {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        self.signals.push(Signal::Render {
            head: snapshot.snake.head(),
            len: snapshot.snake.len(),
            score: snapshot.score,
            status: snapshot.status,
        });
    }

    fn play(&mut self, cue: SoundCue) {
        self.signals.push(Signal::Sound(cue));
    }

    fn start_control(&mut self, enabled: bool) {
        self.signals.push(Signal::StartControl(enabled));
    }

    fn game_over(&mut self, score: u32, cause: Collision) {
        self.signals.push(Signal::GameOver(score, cause));
    }
}

fn session(seed: u64) -> Session {
    let grid = Grid::new(30, 20).expect("grid is valid");
    Session::new(
        GameState::new_with_seed(grid, Rules::default(), seed),
        PERIOD,
    )
}

#[test]
fn start_disables_control_and_renders_first_frame() {
    let mut session = session(1);
    let mut recorder = Recorder::default();

    session
        .start(Instant::now(), &mut recorder)
        .expect("idle session starts");

    assert_eq!(session.status(), SessionState::Running);
    assert!(session.scheduler().is_running());
    assert_eq!(
        recorder.take(),
        vec![
            Signal::StartControl(false),
            Signal::Render {
                head: Cell::new(7, 5),
                len: 3,
                score: 0,
                status: SessionState::Running,
            },
        ]
    );
}

#[test]
fn consumption_plays_sound_then_renders() {
    let mut session = session(2);
    let mut recorder = Recorder::default();
    let start = Instant::now();
    session
        .start(start, &mut recorder)
        .expect("idle session starts");
    recorder.take();

    // The start apple sits at (10, 10); steer the head onto it.
    let mut now = start;
    for turn in [None, None, None, Some(Direction::Down)] {
        if let Some(direction) = turn {
            session.handle_input(GameInput::Direction(direction), now, &mut recorder);
        }
        now += PERIOD;
        assert_eq!(session.poll(now, &mut recorder), Some(TickOutcome::Moved));
    }
    assert_eq!(session.state().snake.head(), Cell::new(10, 6));
    recorder.take();

    let mut outcome = None;
    for _ in 0..4 {
        now += PERIOD;
        outcome = session.poll(now, &mut recorder);
    }

    assert_eq!(outcome, Some(TickOutcome::Consumed));
    let signals = recorder.take();
    assert_eq!(signals.len(), 5);
    assert_eq!(signals[3], Signal::Sound(SoundCue::Consume));
    assert_eq!(
        signals[4],
        Signal::Render {
            head: Cell::new(10, 10),
            len: 4,
            score: 1,
            status: SessionState::Running,
        }
    );
}

#[test]
fn wall_hit_stops_ticking_and_signals_game_over() {
    let mut session = session(3);
    let mut recorder = Recorder::default();
    let start = Instant::now();
    session
        .start(start, &mut recorder)
        .expect("idle session starts");
    session.handle_input(GameInput::Direction(Direction::Up), start, &mut recorder);
    recorder.take();

    // Head climbs from row 5 to row 1; the fifth step hits the top wall.
    let mut now = start;
    let mut last = None;
    for _ in 0..5 {
        now += PERIOD;
        last = session.poll(now, &mut recorder);
    }

    assert_eq!(last, Some(TickOutcome::GameOver(Collision::Wall)));
    assert_eq!(session.status(), SessionState::GameOver);
    assert!(!session.scheduler().is_running());

    let signals = recorder.take();
    assert_eq!(
        signals[signals.len() - 4..],
        [
            Signal::Render {
                head: Cell::new(7, 1),
                len: 3,
                score: 0,
                status: SessionState::GameOver,
            },
            Signal::Sound(SoundCue::GameOver),
            Signal::StartControl(true),
            Signal::GameOver(0, Collision::Wall),
        ]
    );

    assert_eq!(session.poll(now + PERIOD * 10, &mut recorder), None);
    assert!(recorder.take().is_empty());
}

#[test]
fn restart_after_game_over_resets_to_canonical_start() {
    let mut session = session(4);
    let mut recorder = Recorder::default();
    let start = Instant::now();
    session
        .start(start, &mut recorder)
        .expect("idle session starts");
    session.handle_input(GameInput::Direction(Direction::Up), start, &mut recorder);
    while session.step(&mut recorder) != TickOutcome::GameOver(Collision::Wall) {}
    recorder.take();

    session.handle_input(GameInput::Restart, start, &mut recorder);

    assert_eq!(session.status(), SessionState::Idle);
    assert_eq!(
        session.state().snake.segments().copied().collect::<Vec<_>>(),
        START_SEGMENTS
    );
    assert_eq!(session.state().score, 0);
    assert_eq!(recorder.take()[0], Signal::StartControl(true));

    session.handle_input(GameInput::Start, start, &mut recorder);
    assert_eq!(session.status(), SessionState::Running);
    assert_eq!(session.state().snake.direction(), Direction::Right);
}

#[test]
fn start_from_game_over_skips_idle() {
    let mut session = session(5);
    let mut recorder = Recorder::default();
    let start = Instant::now();
    session
        .start(start, &mut recorder)
        .expect("idle session starts");
    session.handle_input(GameInput::Direction(Direction::Down), start, &mut recorder);
    while session.step(&mut recorder) == TickOutcome::Moved {}
    assert_eq!(session.status(), SessionState::GameOver);

    session
        .start(start, &mut recorder)
        .expect("finished session restarts");

    assert_eq!(session.status(), SessionState::Running);
    assert_eq!(session.state().score, 0);
    assert_eq!(session.state().snake.len(), 3);
}

#[test]
fn lifecycle_commands_in_the_wrong_state_are_ignored() {
    let mut session = session(6);
    let mut recorder = Recorder::default();
    let now = Instant::now();

    assert!(session.handle_input(GameInput::Restart, now, &mut recorder));
    assert_eq!(session.status(), SessionState::Idle);

    session
        .start(now, &mut recorder)
        .expect("idle session starts");
    recorder.take();
    assert!(session.handle_input(GameInput::Start, now, &mut recorder));
    assert!(recorder.take().is_empty());
}
