// src/app/update/window.rs
//! Window close handler

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::audio;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RequestClose => {
                tracing::info!("Close requested, shutting down");
                // Dropping the phase state aborts its pending timers
                self.surprise = None;
                self.ui.toast_timer = None;
                audio::shutdown_music();
                Some(iced::exit())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::Message;
    use crate::app::state::App;
    use crate::audio::fake::FakePlayback;
    use crate::audio::{self, BackgroundMusic};
    use crate::features::{Phase, Settings, Stage};

    /// App sitting in the teaser with the music playing
    fn app_at_gift() -> App {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::BeginPressed);
        let _ = app.update(Message::ReadyPressed);
        while app.phase.phase() == Phase::Flow {
            let _ = app.update(Message::NextPressed);
        }
        app
    }

    #[test]
    fn test_close_cancels_timers_and_releases_music() {
        let (backend, state) = FakePlayback::new();
        audio::install_music(move || Ok(BackgroundMusic::new(Box::new(backend), 0.2)));

        let mut app = app_at_gift();
        assert!(audio::music_is_playing());

        let _ = app.update(Message::MusicPoll);
        assert!(app.ui.toast_timer.is_some());

        let _ = app.update(Message::OpenGiftPressed);
        assert!(
            app.surprise
                .as_ref()
                .is_some_and(|surprise| surprise.stage_timer.is_some())
        );

        let _ = app.update(Message::RequestClose);

        assert!(app.surprise.is_none());
        assert!(app.ui.toast_timer.is_none());
        assert!(state.borrow().stopped);
        assert!(!audio::music_is_playing());
    }

    #[test]
    fn test_timer_after_close_is_ignored() {
        let (backend, state) = FakePlayback::new();
        audio::install_music(move || Ok(BackgroundMusic::new(Box::new(backend), 0.2)));

        let mut app = app_at_gift();
        let _ = app.update(Message::OpenGiftPressed);
        let _ = app.update(Message::RequestClose);

        let _ = app.update(Message::StageTimerElapsed(Stage::Shaking));
        let _ = app.update(Message::MusicPoll);

        assert!(app.surprise.is_none());
        assert_eq!(app.phase.phase(), Phase::Surprise);
        assert!(app.ui.toast.is_none());
        assert_eq!(state.borrow().play_calls, 1);
    }
}
