// src/app/state.rs
//! Application state definitions

use std::time::{Duration, Instant};

use iced::task::Handle;

use crate::features::{FlowState, PhaseController, RevealSequencer, Settings, Stage};
use crate::ui::animation::FadeIn;
use crate::ui::effects::particles::{
    self, BurstParticle, ConfettiParticle, HeartParticle, SparkleParticle,
};
use crate::ui::widgets::Toast;

/// Confetti pieces over the letter
pub const CONFETTI_COUNT: usize = 80;
/// Sparks thrown when the lid comes off
pub const BURST_COUNT: usize = 12;
/// Landing page twinkles
pub const SPARKLE_COUNT: usize = 12;

/// Main application state
pub struct App {
    /// Settings and session clock
    pub core: CoreState,
    /// Which phase is on screen
    pub phase: PhaseController,
    /// Present only during the flow phase
    pub flow: Option<FlowState>,
    /// Present only during the surprise phase
    pub surprise: Option<SurpriseState>,
    /// Animations and overlays shared by every phase
    pub ui: UiState,
}

pub struct CoreState {
    pub settings: Settings,
    /// Session start, the zero point for looping particles
    pub started_at: Instant,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            started_at: Instant::now(),
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.settings.display.reduced_motion
    }
}

/// Surprise phase state
///
/// Owns the pending reveal timers. Dropping it aborts them, so a callback
/// can never reach a torn-down reveal.
pub struct SurpriseState {
    pub sequencer: RevealSequencer,
    pub stage_timer: Option<Handle>,
    pub finale_timer: Option<Handle>,
    pub confetti: Vec<ConfettiParticle>,
    pub burst: Vec<BurstParticle>,
    /// When the letter started rising
    pub confetti_started: Option<Instant>,
}

impl SurpriseState {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self {
            sequencer: RevealSequencer::new(),
            stage_timer: None,
            finale_timer: None,
            confetti: particles::generate_confetti(CONFETTI_COUNT, &mut rng),
            burst: particles::generate_burst(BURST_COUNT, &mut rng),
            confetti_started: None,
        }
    }

    pub fn confetti_elapsed(&self, now: Instant) -> Duration {
        self.confetti_started
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or_default()
    }

    /// Whether the current stage is a short scripted transition
    pub fn is_transitioning(&self) -> bool {
        matches!(
            self.sequencer.stage(),
            Stage::Shaking | Stage::LidOff | Stage::LetterRising
        )
    }
}

impl Default for SurpriseState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI View State
pub struct UiState {
    /// Time of the last animation tick
    pub now: Instant,
    pub hearts: Vec<HeartParticle>,
    pub sparkles: Vec<SparkleParticle>,
    /// Fade-in of the current page
    pub page_fade: FadeIn,

    pub toast: Option<Toast>,
    pub toast_fade: FadeIn,
    /// Keeps the pending auto-hide alive
    pub toast_timer: Option<Handle>,

    /// Last observed output state, drives the music button icon
    pub music_playing: bool,
    /// The "music is playing" toast has been shown this session
    pub music_announced: bool,
}

impl UiState {
    pub fn new(heart_count: usize) -> Self {
        let mut rng = rand::rng();
        let mut page_fade = FadeIn::default();
        page_fade.start();

        Self {
            now: Instant::now(),
            hearts: particles::generate_hearts(heart_count, &mut rng),
            sparkles: particles::generate_sparkles(SPARKLE_COUNT, &mut rng),
            page_fade,
            toast: None,
            toast_fade: FadeIn::new(Duration::from_millis(300)),
            toast_timer: None,
            music_playing: false,
            music_announced: false,
        }
    }

    /// Check if any fade is in progress
    pub fn has_active_animations(&self) -> bool {
        self.page_fade.is_animating() || self.toast_fade.is_animating()
    }

    /// Toast to draw and its opacity, including while it fades out
    pub fn toast_overlay(&self) -> Option<(&Toast, f32)> {
        let opacity = self.toast_fade.progress();
        self.toast
            .as_ref()
            .filter(|_| opacity > 0.0)
            .map(|toast| (toast, opacity))
    }

    /// Tick the fades and drop a toast that has fully faded out
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.page_fade.tick(now);
        self.toast_fade.tick(now);

        let faded_out = !self.toast_fade.is_animating() && self.toast_fade.progress() <= 0.0;
        if faded_out && self.toast.as_ref().is_some_and(|toast| !toast.visible) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surprise_starts_with_particles_and_no_timers() {
        let surprise = SurpriseState::new();
        assert_eq!(surprise.confetti.len(), CONFETTI_COUNT);
        assert_eq!(surprise.burst.len(), BURST_COUNT);
        assert!(surprise.stage_timer.is_none());
        assert!(surprise.finale_timer.is_none());
        assert!(!surprise.is_transitioning());
    }

    #[test]
    fn test_confetti_clock_starts_at_zero() {
        let mut surprise = SurpriseState::new();
        let now = Instant::now();
        assert_eq!(surprise.confetti_elapsed(now), Duration::ZERO);

        surprise.confetti_started = Some(now);
        assert_eq!(
            surprise.confetti_elapsed(now + Duration::from_secs(2)),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_ui_state_uses_heart_count() {
        let ui = UiState::new(7);
        assert_eq!(ui.hearts.len(), 7);
        assert_eq!(ui.sparkles.len(), SPARKLE_COUNT);
        assert!(ui.toast.is_none());
        assert!(!ui.music_announced);
    }

    #[test]
    fn test_hidden_toast_fades_before_it_is_dropped() {
        let mut ui = UiState::new(0);
        let start = Instant::now();
        ui.toast = Some(Toast::new("🎵", "Music is playing"));
        ui.toast_fade.restart();
        ui.tick(start + Duration::from_secs(1));
        assert!(ui.toast_overlay().is_some_and(|(_, opacity)| opacity > 0.9));

        if let Some(toast) = &mut ui.toast {
            toast.hide();
        }
        ui.toast_fade.stop();
        // Still on screen until the fade-out has run
        assert!(ui.toast_overlay().is_some_and(|(toast, _)| !toast.visible));

        ui.tick(start + Duration::from_secs(3));
        assert!(ui.toast_overlay().is_none());
        assert!(ui.toast.is_none());
    }
}
