//! Gift reveal sequencer
//!
//! A linear six-state machine. The first and last transitions are user
//! actions; the three in between fire on one-shot timers armed when the
//! previous stage is entered. All operations take the current `Instant`
//! so the sequence can be driven by a simulated clock.

use std::time::{Duration, Instant};

/// Music fade length once the letter has been read
pub const FINALE_FADE: Duration = Duration::from_millis(6000);

/// Delay after the finale starts before the closing lines appear
pub const FINALE_TEXT_DELAY: Duration = Duration::from_millis(6500);

/// Reveal stage, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Stage {
    /// Gift box wobbling, "Are you ready?"
    #[default]
    Teaser = 0,
    /// Box shaking
    Shaking = 1,
    /// Lid flies off with a light burst
    LidOff = 2,
    /// Letter rising out of the box
    LetterRising = 3,
    /// Letter fully shown, confetti
    LetterShown = 4,
    /// Thank-you screen while the music fades
    Finale = 5,
}

impl Stage {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// How long this stage lasts before advancing by itself
    pub fn auto_advance_delay(self) -> Option<Duration> {
        match self {
            Stage::Shaking => Some(Duration::from_millis(900)),
            Stage::LidOff => Some(Duration::from_millis(1100)),
            Stage::LetterRising => Some(Duration::from_millis(800)),
            _ => None,
        }
    }

    fn next(self) -> Option<Stage> {
        match self {
            Stage::Teaser => Some(Stage::Shaking),
            Stage::Shaking => Some(Stage::LidOff),
            Stage::LidOff => Some(Stage::LetterRising),
            Stage::LetterRising => Some(Stage::LetterShown),
            Stage::LetterShown => Some(Stage::Finale),
            Stage::Finale => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealSequencer {
    stage: Stage,
    entered_at: Option<Instant>,
    music_faded: bool,
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealSequencer {
    pub fn new() -> Self {
        Self {
            stage: Stage::Teaser,
            entered_at: None,
            music_faded: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Time spent in the current stage
    pub fn stage_elapsed(&self, now: Instant) -> Duration {
        self.entered_at
            .map(|at| now.saturating_duration_since(at))
            .unwrap_or_default()
    }

    /// "Open Your Gift". Only acts from the teaser.
    ///
    /// Returns the delay of the timer to arm for the new stage.
    pub fn open_gift(&mut self, now: Instant) -> Option<Duration> {
        if self.stage != Stage::Teaser {
            return None;
        }
        self.enter(Stage::Shaking, now);
        Stage::Shaking.auto_advance_delay()
    }

    /// Timer callback for the timer armed on entering `armed_for`
    ///
    /// Callbacks for a stage that is no longer current are ignored. A
    /// callback that arrives early asks to be re-armed for the remainder.
    /// Returns the delay of the timer to arm for the (possibly new) current
    /// stage.
    pub fn on_timer(&mut self, armed_for: Stage, now: Instant) -> Option<Duration> {
        if armed_for != self.stage {
            tracing::debug!(
                "Ignoring stale reveal timer for {:?} (now {:?})",
                armed_for,
                self.stage
            );
            return None;
        }
        let delay = self.stage.auto_advance_delay()?;
        let elapsed = self.stage_elapsed(now);
        if elapsed < delay {
            return Some(delay - elapsed);
        }

        let next = self.stage.next()?;
        self.enter(next, now);
        next.auto_advance_delay()
    }

    /// "Thank You For Reading". Only acts once the letter is shown.
    pub fn finish_reading(&mut self, now: Instant) -> bool {
        if self.stage != Stage::LetterShown {
            return false;
        }
        self.enter(Stage::Finale, now);
        true
    }

    /// Unlock the closing lines after the music has faded
    pub fn mark_music_faded(&mut self) {
        if self.stage == Stage::Finale {
            self.music_faded = true;
        }
    }

    pub fn music_faded(&self) -> bool {
        self.music_faded
    }

    pub fn shows_gift(&self) -> bool {
        self.stage < Stage::LetterRising
    }

    pub fn shows_letter(&self) -> bool {
        matches!(self.stage, Stage::LetterRising | Stage::LetterShown)
    }

    pub fn shows_confetti(&self) -> bool {
        self.shows_letter()
    }

    pub fn is_finale(&self) -> bool {
        self.stage == Stage::Finale
    }

    fn enter(&mut self, stage: Stage, now: Instant) {
        debug_assert!(stage > self.stage);
        tracing::info!("Reveal stage {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
        self.entered_at = Some(now);
    }
}
