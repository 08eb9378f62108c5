use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{error, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::audio::{SoundCue, TerminalAudio};
use crate::config::THEME_ARENA;
use crate::renderer;
use crate::session::{SessionObserver, Snapshot};
use crate::snake::Collision;
use crate::ui::hud::HudInfo;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns raw mode and the alternate screen for the lifetime of the program.
/// Dropping it restores the terminal best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to the alternate screen and creates a ratatui terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Leaves raw mode before the default panic output is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        error!("panic: {panic_info}");
        default_hook(panic_info);
    }));
}

fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Terminal collaborator for a [`crate::session::Session`]: draws frames,
/// plays sound cues and tracks the start control.
pub struct TerminalFrontend {
    session: TerminalSession,
    audio: TerminalAudio,
    start_enabled: bool,
    draw_error: Option<io::Error>,
}

impl TerminalFrontend {
    #[must_use]
    pub fn new(session: TerminalSession, audio: TerminalAudio) -> Self {
        Self {
            session,
            audio,
            start_enabled: true,
            draw_error: None,
        }
    }

    /// Draws `snapshot`, propagating any terminal error immediately.
    pub fn draw(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let hud_info = HudInfo {
            theme: &THEME_ARENA,
            start_enabled: self.start_enabled,
        };
        self.session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, snapshot, hud_info))?;
        Ok(())
    }

    /// Returns the first draw error raised inside an observer callback, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.draw_error.take()
    }
}

impl SessionObserver for TerminalFrontend {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        if let Err(error) = self.draw(snapshot) {
            if self.draw_error.is_none() {
                self.draw_error = Some(error);
            }
        }
    }

    fn play(&mut self, cue: SoundCue) {
        self.audio.play(cue);
    }

    fn start_control(&mut self, enabled: bool) {
        self.start_enabled = enabled;
    }

    fn game_over(&mut self, score: u32, cause: Collision) {
        info!("final score {score} ({cause:?})");
    }
}
