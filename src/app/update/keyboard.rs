// src/app/update/keyboard.rs
//! Keyboard shortcuts
//!
//! Space and Enter trigger whatever the primary button on screen does;
//! M toggles the music.

use iced::Task;
use iced::keyboard::{Key, Modifiers, key::Named};

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{Phase, Stage};

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => match self.shortcut(key, *modifiers) {
                Some(action) => Some(self.update(action)),
                None => Some(Task::none()),
            },
            _ => None,
        }
    }

    /// Message a key press stands for on the current screen
    fn shortcut(&self, key: &Key, modifiers: Modifiers) -> Option<Message> {
        if modifiers.command() || modifiers.alt() {
            return None;
        }

        match key {
            Key::Named(Named::Space | Named::Enter) => self.primary_action(),
            Key::Character(c) if c.as_str().eq_ignore_ascii_case("m") => {
                Some(Message::ToggleMusic)
            }
            _ => None,
        }
    }

    /// The action of the primary button currently on screen, if any
    fn primary_action(&self) -> Option<Message> {
        match self.phase.phase() {
            Phase::Landing => Some(Message::BeginPressed),
            Phase::Flow => {
                let flow = self.flow.as_ref()?;
                if flow.show_intro() {
                    Some(Message::ReadyPressed)
                } else {
                    Some(Message::NextPressed)
                }
            }
            Phase::Surprise => match self.surprise.as_ref()?.sequencer.stage() {
                Stage::Teaser => Some(Message::OpenGiftPressed),
                Stage::LetterShown => Some(Message::FinishedReadingPressed),
                _ => None,
            },
        }
    }
}
