use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{GLYPH_APPLE, GLYPH_CELL, GLYPH_WALL, TERMINAL_COLUMNS_PER_CELL, Theme};
use crate::game::SessionState;
use crate::grid::{Cell, Grid};
use crate::session::Snapshot;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, hud_info: HudInfo<'_>) {
    let area = frame.area();
    let theme = hud_info.theme;
    frame.render_widget(Block::new().style(Style::new().bg(theme.play_bg)), area);

    let play_area = render_hud(frame, area, snapshot, &hud_info);
    let arena = arena_rect(play_area, snapshot.grid);

    let buffer = frame.buffer_mut();
    render_walls(buffer, arena, snapshot.grid, theme);
    render_apple(buffer, arena, snapshot.apple, theme);
    render_snake(buffer, arena, snapshot, theme);

    match snapshot.status {
        SessionState::Idle => render_start_menu(frame, arena, theme),
        SessionState::GameOver => {
            render_game_over_menu(frame, arena, snapshot.score, snapshot.death_reason, theme);
        }
        SessionState::Running => {}
    }
}

/// Centers the arena inside `area`, clipping it when the terminal is too small.
fn arena_rect(area: Rect, grid: Grid) -> Rect {
    let width = grid
        .width()
        .saturating_mul(TERMINAL_COLUMNS_PER_CELL)
        .min(area.width);
    let height = grid.height().min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_walls(buffer: &mut Buffer, arena: Rect, grid: Grid, theme: &Theme) {
    let style = Style::new().fg(theme.wall).bg(theme.play_bg);
    let (width, height) = (i32::from(grid.width()), i32::from(grid.height()));

    for row in 0..height {
        for col in 0..width {
            let cell = Cell::new(col, row);
            if !grid.is_wall(cell) {
                continue;
            }
            if let Some((x, y)) = cell_to_terminal(arena, cell) {
                buffer.set_string(x, y, GLYPH_WALL, style);
            }
        }
    }
}

fn render_apple(buffer: &mut Buffer, arena: Rect, apple: Cell, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(arena, apple) else {
        return;
    };

    buffer.set_string(
        x,
        y,
        GLYPH_APPLE,
        Style::new()
            .fg(theme.apple)
            .bg(theme.play_bg)
            .add_modifier(Modifier::BOLD),
    );
}

fn render_snake(buffer: &mut Buffer, arena: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let head_style = Style::new().fg(theme.snake_head).bg(theme.play_bg);
    let body_style = Style::new().fg(theme.snake_body).bg(theme.play_bg);

    // Tail first so the head wins if segments ever overlap on screen.
    for (index, segment) in snapshot.snake.segments().enumerate().rev() {
        let Some((x, y)) = cell_to_terminal(arena, *segment) else {
            continue;
        };

        let style = if index == 0 { head_style } else { body_style };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

/// Maps a logical cell to the top-left terminal position of its glyph.
fn cell_to_terminal(arena: Rect, cell: Cell) -> Option<(u16, u16)> {
    let col = u16::try_from(cell.col).ok()?;
    let row = u16::try_from(cell.row).ok()?;

    let x = arena
        .x
        .checked_add(col.checked_mul(TERMINAL_COLUMNS_PER_CELL)?)?;
    let y = arena.y.checked_add(row)?;
    if x.saturating_add(TERMINAL_COLUMNS_PER_CELL) > arena.right() || y >= arena.bottom() {
        return None;
    }

    Some((x, y))
}
