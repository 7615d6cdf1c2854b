// src/app/update/reveal.rs
//! Gift reveal handlers

use std::time::{Duration, Instant};

use iced::Task;

use super::delayed;
use crate::app::message::Message;
use crate::app::state::App;
use crate::audio;
use crate::features::Stage;
use crate::features::reveal::{FINALE_FADE, FINALE_TEXT_DELAY};

impl App {
    /// Handle reveal sequence messages
    pub fn handle_reveal(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenGiftPressed => {
                let now = Instant::now();
                let delay = self
                    .surprise
                    .as_mut()
                    .and_then(|surprise| surprise.sequencer.open_gift(now));
                Some(self.arm_stage_timer(delay))
            }

            Message::StageTimerElapsed(armed_for) => {
                let now = Instant::now();
                let Some(surprise) = self.surprise.as_mut() else {
                    return Some(Task::none());
                };
                let delay = surprise.sequencer.on_timer(*armed_for, now);
                if surprise.sequencer.stage() == Stage::LetterRising
                    && surprise.confetti_started.is_none()
                {
                    surprise.confetti_started = Some(now);
                }
                Some(self.arm_stage_timer(delay))
            }

            Message::FinishedReadingPressed => {
                let now = Instant::now();
                let Some(surprise) = self.surprise.as_mut() else {
                    return Some(Task::none());
                };
                if !surprise.sequencer.finish_reading(now) {
                    return Some(Task::none());
                }

                surprise.stage_timer = None;
                audio::fade_music(FINALE_FADE);
                let (task, handle) = delayed(FINALE_TEXT_DELAY, Message::FinaleFadeElapsed);
                surprise.finale_timer = Some(handle);
                Some(task)
            }

            Message::FinaleFadeElapsed => {
                if let Some(surprise) = self.surprise.as_mut() {
                    surprise.finale_timer = None;
                    surprise.sequencer.mark_music_faded();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Arm the one-shot timer for the current stage
    ///
    /// Replacing the stored handle aborts whatever was pending before.
    fn arm_stage_timer(&mut self, delay: Option<Duration>) -> Task<Message> {
        let Some(surprise) = self.surprise.as_mut() else {
            return Task::none();
        };
        let Some(delay) = delay else {
            return Task::none();
        };

        let stage = surprise.sequencer.stage();
        tracing::debug!("Arming {:?} timer for {:?}", stage, delay);
        let (task, handle) = delayed(delay, Message::StageTimerElapsed(stage));
        surprise.stage_timer = Some(handle);
        task
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::app::Message;
    use crate::app::state::App;
    use crate::features::{Phase, Settings, Stage};

    fn surprise_app() -> App {
        let mut settings = Settings::default();
        settings.music.autoplay = false;
        let mut app = App::with_settings(settings);
        app.phase.advance();
        app.phase.advance();
        app.surprise = Some(Default::default());
        assert_eq!(app.phase.phase(), Phase::Surprise);
        app
    }

    fn stage(app: &App) -> Option<Stage> {
        app.surprise.as_ref().map(|surprise| surprise.sequencer.stage())
    }

    #[test]
    fn test_open_gift_arms_a_timer() {
        let mut app = surprise_app();
        let _ = app.update(Message::OpenGiftPressed);
        assert_eq!(stage(&app), Some(Stage::Shaking));
        assert!(app.surprise.as_ref().is_some_and(|s| s.stage_timer.is_some()));
    }

    #[test]
    fn test_early_timer_keeps_the_stage() {
        let mut app = surprise_app();
        let _ = app.update(Message::OpenGiftPressed);
        // Fires immediately, long before the delay has passed
        let _ = app.update(Message::StageTimerElapsed(Stage::Shaking));
        assert_eq!(stage(&app), Some(Stage::Shaking));
        assert!(app.surprise.as_ref().is_some_and(|s| s.stage_timer.is_some()));
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut app = surprise_app();
        let _ = app.update(Message::StageTimerElapsed(Stage::LidOff));
        assert_eq!(stage(&app), Some(Stage::Teaser));
    }

    #[test]
    fn test_finish_reading_before_letter_does_nothing() {
        let mut app = surprise_app();
        let _ = app.update(Message::FinishedReadingPressed);
        assert_eq!(stage(&app), Some(Stage::Teaser));
        assert!(app.surprise.as_ref().is_some_and(|s| s.finale_timer.is_none()));
    }

    #[test]
    fn test_finale_fade_before_finale_is_ignored() {
        let mut app = surprise_app();
        let _ = app.update(Message::FinaleFadeElapsed);
        assert!(
            app.surprise
                .as_ref()
                .is_some_and(|s| !s.sequencer.music_faded())
        );
    }

    #[test]
    fn test_finish_reading_starts_finale_timer() {
        let mut app = surprise_app();
        let t0 = Instant::now();
        if let Some(surprise) = app.surprise.as_mut() {
            let sequencer = &mut surprise.sequencer;
            sequencer.open_gift(t0);
            sequencer.on_timer(Stage::Shaking, t0 + Duration::from_millis(900));
            sequencer.on_timer(Stage::LidOff, t0 + Duration::from_millis(2000));
            sequencer.on_timer(Stage::LetterRising, t0 + Duration::from_millis(2800));
        }
        assert_eq!(stage(&app), Some(Stage::LetterShown));

        let _ = app.update(Message::FinishedReadingPressed);
        assert_eq!(stage(&app), Some(Stage::Finale));
        assert!(app.surprise.as_ref().is_some_and(|s| s.finale_timer.is_some()));

        let _ = app.update(Message::FinaleFadeElapsed);
        assert!(
            app.surprise
                .as_ref()
                .is_some_and(|s| s.sequencer.music_faded() && s.finale_timer.is_none())
        );
    }
}
