use std::io::{self, Write};

use log::{debug, warn};

use crate::config::{SOUND_CONSUME, SOUND_GAME_OVER};

/// Discrete sound triggers emitted by the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SoundCue {
    Consume,
    GameOver,
}

impl SoundCue {
    /// Name of the sound resource associated with this cue.
    #[must_use]
    pub fn resource(self) -> &'static str {
        match self {
            Self::Consume => SOUND_CONSUME,
            Self::GameOver => SOUND_GAME_OVER,
        }
    }
}

/// Terminal stand-in for audio playback: records each cue in the log and
/// optionally rings the terminal bell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalAudio {
    bell: bool,
}

impl TerminalAudio {
    #[must_use]
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }

    /// Fire-and-forget playback; failures are logged and otherwise ignored.
    pub fn play(&self, cue: SoundCue) {
        debug!("sound cue {cue:?} ({})", cue.resource());

        if !self.bell {
            return;
        }

        let mut stdout = io::stdout();
        if let Err(error) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            warn!("failed to ring terminal bell: {error}");
        }
    }
}
