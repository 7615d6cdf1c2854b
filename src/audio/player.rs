//! Background music player
//!
//! `BackgroundMusic` owns one `Playback` backend and layers session
//! behaviour on top of it: idempotent start, a timed fade-out that ends in
//! a pause, and the play/pause toggle behind the music button.

use std::time::{Duration, Instant};

use super::AudioError;

/// Output backend seam
///
/// Implemented by the rodio output and by fakes in tests.
pub trait Playback {
    /// Start or resume the looped track
    fn play(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self);
    /// Stop and drop whatever is queued
    fn stop(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;
    /// Whether the output is actually producing sound right now
    fn is_playing(&self) -> bool;
}

/// Playback status as requested by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing,
    Paused,
    /// Currently fading out before pause
    Pausing,
}

/// Fade state for the finale fade-out
#[derive(Debug, Clone, Copy, PartialEq)]
enum FadeState {
    None,
    FadingOut {
        start_time: Instant,
        duration: Duration,
        start_volume: f32,
    },
}

pub struct BackgroundMusic {
    backend: Box<dyn Playback>,
    /// Configured volume, restored whenever playback starts
    volume: f32,
    status: PlaybackStatus,
    fade_state: FadeState,
}

impl std::fmt::Debug for BackgroundMusic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundMusic")
            .field("volume", &self.volume)
            .field("status", &self.status)
            .field("fade_state", &self.fade_state)
            .finish()
    }
}

impl BackgroundMusic {
    pub fn new(mut backend: Box<dyn Playback>, volume: f32) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        backend.set_volume(volume);
        Self {
            backend,
            volume,
            status: PlaybackStatus::Stopped,
            fade_state: FadeState::None,
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Start playback unless it is already running
    ///
    /// A refused start is logged and dropped; the next call tries again.
    pub fn start(&mut self) {
        if matches!(
            self.status,
            PlaybackStatus::Playing | PlaybackStatus::Pausing
        ) {
            return;
        }

        self.backend.set_volume(self.volume);
        match self.backend.play() {
            Ok(()) => {
                self.status = PlaybackStatus::Playing;
                tracing::info!("Background music started at volume {:.2}", self.volume);
            }
            Err(e) => {
                tracing::debug!("Background music did not start: {}", e);
            }
        }
    }

    /// Pause immediately, cancelling any fade
    pub fn pause(&mut self) {
        if self.status == PlaybackStatus::Stopped {
            return;
        }
        self.fade_state = FadeState::None;
        self.backend.pause();
        self.status = PlaybackStatus::Paused;
    }

    /// Music button: pause if playing, otherwise (re)start
    pub fn toggle(&mut self) {
        match self.status {
            PlaybackStatus::Playing | PlaybackStatus::Pausing => self.pause(),
            PlaybackStatus::Stopped | PlaybackStatus::Paused => self.start(),
        }
    }

    /// Ramp the volume linearly to zero over `duration`, then pause
    pub fn fade_out(&mut self, duration: Duration, now: Instant) {
        if self.status != PlaybackStatus::Playing {
            return;
        }
        if duration.is_zero() {
            self.finish_fade();
            return;
        }
        self.fade_state = FadeState::FadingOut {
            start_time: now,
            duration,
            start_volume: self.backend.volume(),
        };
        self.status = PlaybackStatus::Pausing;
        tracing::info!("Fading out background music over {:?}", duration);
    }

    /// Update fade state (call regularly while fading)
    ///
    /// Returns true while a fade is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let FadeState::FadingOut {
            start_time,
            duration,
            start_volume,
        } = self.fade_state
        else {
            return false;
        };

        let elapsed = now.saturating_duration_since(start_time);
        if elapsed >= duration {
            self.finish_fade();
            return false;
        }

        let progress = elapsed.as_secs_f32() / duration.as_secs_f32();
        self.backend.set_volume(start_volume * (1.0 - progress));
        true
    }

    pub fn is_fading(&self) -> bool {
        matches!(self.fade_state, FadeState::FadingOut { .. })
    }

    /// Whether the output is audibly playing
    pub fn is_playing(&self) -> bool {
        self.backend.is_playing()
    }

    /// Stop playback and release what the backend holds
    pub fn stop(&mut self) {
        self.fade_state = FadeState::None;
        self.backend.stop();
        self.status = PlaybackStatus::Stopped;
    }

    fn finish_fade(&mut self) {
        self.backend.set_volume(0.0);
        self.backend.pause();
        self.fade_state = FadeState::None;
        self.status = PlaybackStatus::Paused;
        tracing::debug!("Background music faded out");
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Observable state of a `FakePlayback`
    #[derive(Debug, Default)]
    pub struct FakeState {
        pub play_calls: u32,
        pub instances_playing: u32,
        pub paused: bool,
        pub stopped: bool,
        pub volume: f32,
        pub refuse: bool,
    }

    /// Playback backend that records what it was asked to do
    pub struct FakePlayback {
        pub state: Rc<RefCell<FakeState>>,
    }

    impl FakePlayback {
        pub fn new() -> (Self, Rc<RefCell<FakeState>>) {
            let state = Rc::new(RefCell::new(FakeState::default()));
            (
                Self {
                    state: state.clone(),
                },
                state,
            )
        }
    }

    impl Playback for FakePlayback {
        fn play(&mut self) -> Result<(), AudioError> {
            let mut state = self.state.borrow_mut();
            state.play_calls += 1;
            if state.refuse {
                return Err(AudioError::Output("refused".to_string()));
            }
            // One looped source per sink, like the rodio backend
            state.instances_playing = 1;
            state.paused = false;
            state.stopped = false;
            Ok(())
        }

        fn pause(&mut self) {
            self.state.borrow_mut().paused = true;
        }

        fn stop(&mut self) {
            let mut state = self.state.borrow_mut();
            state.stopped = true;
            state.instances_playing = 0;
        }

        fn set_volume(&mut self, volume: f32) {
            self.state.borrow_mut().volume = volume;
        }

        fn volume(&self) -> f32 {
            self.state.borrow().volume
        }

        fn is_playing(&self) -> bool {
            let state = self.state.borrow();
            state.instances_playing > 0 && !state.paused && !state.stopped
        }
    }
}
