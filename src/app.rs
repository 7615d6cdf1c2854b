//! Main application module

mod message;
mod state;
mod update;
mod view;

use std::time::Duration;

use iced::{Task, Theme};

use crate::audio::{self, AudioError, BackgroundMusic, RodioPlayback};
use crate::features::{PhaseController, Settings};
pub use message::Message;
pub use state::{App, CoreState, SurpriseState, UiState};

/// Music button reconciliation interval
const MUSIC_POLL_INTERVAL: Duration = Duration::from_millis(300);
/// Fade step interval while the music is fading out
const MUSIC_FADE_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings
        let settings = Settings::load();

        // 2. Register the background track; the output opens on first use
        let music = settings.music.clone();
        audio::install_music(move || {
            if music.track_path.as_os_str().is_empty() {
                return Err(AudioError::Disabled);
            }
            let backend = RodioPlayback::open(&music.track_path)?;
            Ok(BackgroundMusic::new(Box::new(backend), music.volume))
        });

        let app = Self::with_settings(settings);

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(1100.0, 780.0),
            min_size: Some(iced::Size::new(720.0, 600.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "heartnote".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application state on the landing phase, without a window
    pub fn with_settings(settings: Settings) -> Self {
        let ui = UiState::new(settings.display.heart_count);
        Self {
            core: CoreState::new(settings),
            phase: PhaseController::new(),
            flow: None,
            surprise: None,
            ui,
        }
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        Theme::Dark
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        "Happy Birthday ❤️".to_string()
    }

    /// Subscriptions for animations, music, keyboard events, and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let transitioning = self.ui.has_active_animations()
            || self
                .surprise
                .as_ref()
                .is_some_and(|surprise| surprise.is_transitioning());

        // 1. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(subscription_logic::key_press);

        // 2. Window events
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        // 3. Animation subscription (vsync rate when needed)
        let animation_sub = if subscription_logic::needs_frames(
            self.core.reduced_motion(),
            transitioning,
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 4. Music polling, always on
        let poll_sub = iced::time::every(MUSIC_POLL_INTERVAL).map(|_| Message::MusicPoll);

        // 5. Fade steps, only while a fade is running
        let fade_sub = if subscription_logic::needs_fade_ticks(audio::music_is_fading()) {
            iced::time::every(MUSIC_FADE_INTERVAL).map(|_| Message::MusicFadeTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([
            keyboard_sub,
            close_request_sub,
            animation_sub,
            poll_sub,
            fade_sub,
        ])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use iced::keyboard;

    use super::Message;

    /// Fresh key presses only; holding a key must not race through the notes
    pub fn key_press(event: keyboard::Event) -> Option<Message> {
        match event {
            keyboard::Event::KeyPressed {
                key,
                modifiers,
                repeat: false,
                ..
            } => Some(Message::KeyPressed(key, modifiers)),
            _ => None,
        }
    }

    /// Frames run continuously for the particle layers, or only during
    /// fades and reveal transitions with reduced motion
    pub fn needs_frames(reduced_motion: bool, transitioning: bool) -> bool {
        !reduced_motion || transitioning
    }

    pub fn needs_fade_ticks(is_fading: bool) -> bool {
        is_fading
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::key::{Code, Named, Physical};
    use iced::keyboard::{self, Key, Location, Modifiers};

    use super::Message;
    use super::subscription_logic::*;

    fn space(repeat: bool) -> keyboard::Event {
        keyboard::Event::KeyPressed {
            key: Key::Named(Named::Space),
            modified_key: Key::Named(Named::Space),
            physical_key: Physical::Code(Code::Space),
            location: Location::Standard,
            modifiers: Modifiers::empty(),
            text: None,
            repeat,
        }
    }

    #[test]
    fn key_presses_are_forwarded() {
        assert!(matches!(
            key_press(space(false)),
            Some(Message::KeyPressed(Key::Named(Named::Space), _))
        ));
    }

    #[test]
    fn key_repeats_are_dropped() {
        assert!(key_press(space(true)).is_none());
    }

    #[test]
    fn frames_always_run_with_full_motion() {
        assert!(needs_frames(false, false));
        assert!(needs_frames(false, true));
    }

    #[test]
    fn reduced_motion_only_animates_transitions() {
        assert!(!needs_frames(true, false));
        assert!(needs_frames(true, true));
    }

    #[test]
    fn fade_ticks_follow_the_fade() {
        assert!(needs_fade_ticks(true));
        assert!(!needs_fade_ticks(false));
    }
}
