use ratatui::style::Color;

/// Edge length of one grid cell on the drawing canvas, in pixels.
pub const CELL_SIZE_PX: u32 = 20;

/// Default canvas width in pixels (30 cells).
pub const DEFAULT_CANVAS_WIDTH_PX: u32 = 600;

/// Default canvas height in pixels (20 cells).
pub const DEFAULT_CANVAS_HEIGHT_PX: u32 = 400;

/// Fixed tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Shortest tick interval accepted from settings or the command line.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Sleep between front-end loop iterations while waiting for input.
pub const FRAME_POLL_INTERVAL_MS: u64 = 16;

/// Sound resource played when the apple is eaten.
pub const SOUND_CONSUME: &str = "EatingAnApple.mp3";

/// Sound resource played on game over.
pub const SOUND_GAME_OVER: &str = "GameOver.mp3";

/// Application directory under the platform config dir.
pub const APP_DIR_NAME: &str = "arena-snake";

/// Default log file name, created in the working directory.
pub const DEFAULT_LOG_FILE: &str = "arena-snake.log";

/// Terminal columns used to draw one grid cell. Two columns keep cells
/// roughly square in most terminal fonts.
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;

pub const GLYPH_CELL: &str = "██";
pub const GLYPH_APPLE: &str = "()";
pub const GLYPH_WALL: &str = "▓▓";

/// Colors applied to the arena and overlays.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub apple: Color,
    pub wall: Color,
    pub play_bg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub banner_title: Color,
}

/// Green-on-black palette matching the arena border color of the browser
/// version of the game.
pub const THEME_ARENA: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    apple: Color::Rgb(50, 205, 50),
    wall: Color::Rgb(1, 212, 4),
    play_bg: Color::Black,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    banner_title: Color::Red,
};
