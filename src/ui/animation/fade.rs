//! Fade-in animation using iced_anim

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Default fade duration
const FADE_DURATION: Duration = Duration::from_millis(600);

fn fade_easing(duration: Duration) -> Easing {
    Easing::EASE_OUT.with_duration(duration)
}

/// Opacity that eases from 0 to 1
///
/// Used when a phase page or the toast appears. `restart` jumps back to
/// fully transparent and fades in again.
#[derive(Debug)]
pub struct FadeIn {
    animation: Animated<f32>,
    duration: Duration,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new(FADE_DURATION)
    }
}

impl FadeIn {
    /// Hidden fade of the given length
    pub fn new(duration: Duration) -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing(duration)),
            duration,
        }
    }

    /// Fade in from wherever the value currently is
    pub fn start(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Fade back out
    pub fn stop(&mut self) {
        self.animation.update(0.0.into());
    }

    /// Drop to transparent and fade in again
    pub fn restart(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing(self.duration));
        self.start();
    }

    /// Current opacity (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
