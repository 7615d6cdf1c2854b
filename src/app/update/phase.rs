// src/app/update/phase.rs
//! Landing and message flow handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, SurpriseState};
use crate::audio;
use crate::content::NOTES;
use crate::features::{FlowState, PageAdvance, Phase};

impl App {
    /// Handle phase and paging messages
    pub fn handle_phase(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::BeginPressed => {
                if self.phase.phase() != Phase::Landing {
                    return Some(Task::none());
                }
                if self.core.settings.music.autoplay {
                    audio::start_music();
                }
                self.advance_phase();
                Some(Task::none())
            }

            Message::ReadyPressed => {
                if let Some(flow) = &mut self.flow {
                    if flow.begin_reading() {
                        self.ui.page_fade.restart();
                    }
                }
                Some(Task::none())
            }

            Message::NextPressed => {
                let Some(flow) = &mut self.flow else {
                    return Some(Task::none());
                };
                match flow.next() {
                    Some(PageAdvance::Moved(index)) => {
                        tracing::debug!("Showing note {}", index + 1);
                        self.ui.page_fade.restart();
                    }
                    Some(PageAdvance::Completed) => self.advance_phase(),
                    None => {}
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Move to the next phase and set up its state
    fn advance_phase(&mut self) {
        let Some(phase) = self.phase.advance() else {
            return;
        };

        match phase {
            Phase::Landing => {}
            Phase::Flow => {
                self.flow = Some(FlowState::new(NOTES));
            }
            Phase::Surprise => {
                self.flow = None;
                self.surprise = Some(SurpriseState::new());
            }
        }
        self.ui.page_fade.restart();
    }
}

#[cfg(test)]
mod tests {
    use crate::app::state::App;
    use crate::app::Message;
    use crate::features::{Phase, Settings, Stage};

    fn app() -> App {
        let mut settings = Settings::default();
        settings.music.autoplay = false;
        App::with_settings(settings)
    }

    #[test]
    fn test_begin_enters_flow_with_intro() {
        let mut app = app();
        let _ = app.update(Message::BeginPressed);
        assert_eq!(app.phase.phase(), Phase::Flow);
        assert!(app.flow.as_ref().is_some_and(|flow| flow.show_intro()));
    }

    #[test]
    fn test_begin_only_works_on_landing() {
        let mut app = app();
        let _ = app.update(Message::BeginPressed);
        let _ = app.update(Message::BeginPressed);
        assert_eq!(app.phase.phase(), Phase::Flow);
    }

    #[test]
    fn test_next_is_ignored_during_intro() {
        let mut app = app();
        let _ = app.update(Message::BeginPressed);
        let _ = app.update(Message::NextPressed);
        let flow = app.flow.as_ref().map(|flow| (flow.show_intro(), flow.pager().index()));
        assert_eq!(flow, Some((true, 0)));
    }

    #[test]
    fn test_reading_every_note_opens_the_surprise() {
        let mut app = app();
        let _ = app.update(Message::BeginPressed);
        let _ = app.update(Message::ReadyPressed);

        let notes = app.flow.as_ref().map(|flow| flow.pager().len()).unwrap_or(0);
        for _ in 1..notes {
            let _ = app.update(Message::NextPressed);
            assert_eq!(app.phase.phase(), Phase::Flow);
        }
        let _ = app.update(Message::NextPressed);

        assert_eq!(app.phase.phase(), Phase::Surprise);
        assert!(app.flow.is_none());
        let stage = app.surprise.as_ref().map(|surprise| surprise.sequencer.stage());
        assert_eq!(stage, Some(Stage::Teaser));
    }
}
