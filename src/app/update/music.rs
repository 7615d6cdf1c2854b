// src/app/update/music.rs
//! Background music handlers

use std::time::Duration;

use iced::Task;

use super::delayed;
use crate::app::message::Message;
use crate::app::state::App;
use crate::audio;
use crate::content::music;
use crate::ui::widgets::Toast;

/// How long the "music is playing" toast stays up
const TOAST_DURATION: Duration = Duration::from_millis(3500);

impl App {
    /// Handle music button, polling and fade messages
    pub fn handle_music(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::MusicPoll => Some(self.observe_music(audio::music_is_playing())),

            Message::MusicFadeTick => {
                audio::tick_music();
                Some(Task::none())
            }

            Message::ToggleMusic => {
                audio::toggle_music();
                Some(self.observe_music(audio::music_is_playing()))
            }

            Message::HideToast => {
                self.ui.toast_timer = None;
                if let Some(toast) = &mut self.ui.toast {
                    toast.hide();
                    self.ui.toast_fade.stop();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Mirror the output state into the UI
    ///
    /// The first time sound is observed the toast is shown, once per
    /// session.
    fn observe_music(&mut self, playing: bool) -> Task<Message> {
        if playing != self.ui.music_playing {
            tracing::debug!("Music playing: {}", playing);
            self.ui.music_playing = playing;
        }

        if !playing || self.ui.music_announced {
            return Task::none();
        }

        self.ui.music_announced = true;
        self.ui.toast = Some(Toast::new(music::PLAYING_ICON, music::TOAST));
        self.ui.toast_fade.restart();

        let (task, handle) = delayed(TOAST_DURATION, Message::HideToast);
        self.ui.toast_timer = Some(handle);
        task
    }
}

#[cfg(test)]
mod tests {
    use crate::app::Message;
    use crate::app::state::App;
    use crate::features::Settings;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    #[test]
    fn test_toast_shown_once_per_session() {
        let mut app = app();
        let _ = app.observe_music(true);
        assert!(app.ui.music_announced);
        assert!(app.ui.toast.as_ref().is_some_and(|toast| toast.visible));

        let _ = app.update(Message::HideToast);
        assert!(app.ui.toast.as_ref().is_some_and(|toast| !toast.visible));

        // Pausing and resuming does not announce again
        let _ = app.observe_music(false);
        let _ = app.observe_music(true);
        assert!(app.ui.toast.as_ref().is_none_or(|toast| !toast.visible));
    }

    #[test]
    fn test_button_mirrors_output_state() {
        let mut app = app();
        let _ = app.observe_music(true);
        assert!(app.ui.music_playing);
        let _ = app.observe_music(false);
        assert!(!app.ui.music_playing);
    }

    #[test]
    fn test_silence_does_not_announce() {
        let mut app = app();
        let _ = app.observe_music(false);
        assert!(!app.ui.music_announced);
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn test_poll_without_music_is_quiet() {
        let mut app = app();
        let _ = app.update(Message::MusicPoll);
        assert!(!app.ui.music_playing);
        assert!(app.ui.toast.is_none());
    }
}
