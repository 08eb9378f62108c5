use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::SessionState;
use crate::session::Snapshot;

const HUD_MARGIN_X: u16 = 1;
const SEPARATOR: &str = " │ ";

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
    /// Mirrors the external start control: true while a start/restart is accepted.
    pub start_enabled: bool,
}

/// Renders the one-line HUD below the arena and returns the area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, hud_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let hud_area = inset_horizontal(hud_row, HUD_MARGIN_X);

    let score_text = format!("Score: {}", snapshot.score);
    let [score_area, status_area] = Layout::horizontal([
        Constraint::Length(clamp_width(score_text.width())),
        Constraint::Min(0),
    ])
    .areas(hud_area);

    let score_style = Style::default()
        .fg(info.theme.hud_score)
        .add_modifier(Modifier::BOLD);
    let score = Line::from(Span::styled(score_text, score_style));
    frame.render_widget(Paragraph::new(score), score_area);

    let status = status_line(snapshot, info, usize::from(status_area.width));
    frame.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Right)
            .style(Style::default().fg(info.theme.hud_muted)),
        status_area,
    );

    play_area
}

fn status_line(
    snapshot: &Snapshot<'_>,
    info: &HudInfo<'_>,
    available_width: usize,
) -> Line<'static> {
    let length = snapshot.snake.len();
    let dimensions = format!("{}x{}", snapshot.grid.width(), snapshot.grid.height());
    let hint = control_hint(snapshot.status, info.start_enabled);

    let full = format!("Length: {length}{SEPARATOR}{dimensions}{SEPARATOR}{hint}");
    if full.width() <= available_width {
        return Line::from(full);
    }

    let compact = format!("L: {length}{SEPARATOR}{hint}");
    if compact.width() <= available_width {
        return Line::from(compact);
    }

    Line::from(format!("L: {length}"))
}

fn control_hint(status: SessionState, start_enabled: bool) -> &'static str {
    match status {
        SessionState::Running => "[Arrows] Steer  [Q] Quit",
        SessionState::GameOver if start_enabled => "[Enter] Again  [R] Reset",
        SessionState::Idle if start_enabled => "[Enter] Start",
        _ => "[Q] Quit",
    }
}

fn clamp_width(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
