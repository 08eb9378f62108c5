use arena_snake::apple::Apple;
use arena_snake::game::{GameState, Rules, SessionState, TickOutcome};
use arena_snake::grid::{Cell, Grid};
use arena_snake::input::Direction;
use arena_snake::snake::{Collision, Snake};

fn running_state(width: u16, height: u16, seed: u64) -> GameState {
    let grid = Grid::new(width, height).expect("grid is valid");
    let mut state = GameState::new_with_seed(grid, Rules::default(), seed);
    state.status = SessionState::Running;
    state
}

fn segments(snake: &Snake) -> Vec<Cell> {
    snake.segments().copied().collect()
}

#[test]
fn three_ticks_without_input_move_straight_right() {
    let mut state = running_state(30, 20, 42);
    assert_eq!(
        segments(&state.snake),
        vec![Cell::new(7, 5), Cell::new(6, 5), Cell::new(5, 5)]
    );
    assert_eq!(state.apple.position, Cell::new(10, 10));

    for _ in 0..3 {
        assert_eq!(state.tick(), TickOutcome::Moved);
    }

    assert_eq!(state.snake.head(), Cell::new(10, 5));
    assert_eq!(state.status, SessionState::Running);
    assert_eq!(state.score, 0);
}

#[test]
fn eating_the_apple_scores_grows_and_relocates() {
    let mut state = running_state(30, 20, 7);
    state.apple = Apple::at(Cell::new(8, 5));

    assert_eq!(state.tick(), TickOutcome::Consumed);

    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    let Cell { col, row } = state.apple.position;
    assert!((1..=28).contains(&col));
    assert!((1..=18).contains(&row));
}

#[test]
fn moving_left_into_column_zero_ends_the_game() {
    let mut state = running_state(30, 20, 3);
    state.snake = Snake::from_segments(
        vec![Cell::new(1, 8), Cell::new(2, 8), Cell::new(3, 8)],
        Direction::Left,
    );
    let before = segments(&state.snake);

    assert_eq!(state.tick(), TickOutcome::GameOver(Collision::Wall));

    assert_eq!(state.status, SessionState::GameOver);
    assert_eq!(segments(&state.snake), before);
}

#[test]
fn reverse_request_is_ignored_and_snake_keeps_going() {
    let mut state = running_state(30, 20, 5);
    state.snake = Snake::from_segments(
        vec![Cell::new(12, 10), Cell::new(12, 11), Cell::new(12, 12)],
        Direction::Up,
    );

    assert!(!state.steer(Direction::Down));
    state.tick();

    assert_eq!(state.snake.head(), Cell::new(12, 9));
    assert_eq!(state.snake.direction(), Direction::Up);
}

#[test]
fn repeated_identical_input_equals_single_input() {
    let mut once = running_state(30, 20, 8);
    let mut twice = once.clone();

    once.steer(Direction::Down);
    twice.steer(Direction::Down);
    twice.steer(Direction::Down);
    once.tick();
    twice.tick();

    assert_eq!(once.snake, twice.snake);
}

#[test]
fn length_changes_only_on_consumption() {
    let mut state = running_state(30, 20, 11);
    let turns = [
        Direction::Down,
        Direction::Down,
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Up,
        Direction::Right,
    ];

    for (tick, turn) in turns.iter().cycle().take(120).enumerate() {
        // Lure the apple onto the head's path every fifth tick.
        if tick % 5 == 0 {
            state.apple = Apple::at(state.snake.next_head_position());
        }
        state.steer(*turn);

        let before = state.snake.len();
        let direction_before = state.snake.direction();
        match state.tick() {
            TickOutcome::Consumed => assert_eq!(state.snake.len(), before + 1),
            TickOutcome::Moved => assert_eq!(state.snake.len(), before),
            TickOutcome::GameOver(_) => {
                assert_eq!(state.snake.len(), before);
                break;
            }
            TickOutcome::Skipped => unreachable!("state is running"),
        }
        assert_ne!(state.snake.direction(), direction_before.opposite());
    }
}
