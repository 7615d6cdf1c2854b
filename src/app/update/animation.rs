// src/app/update/animation.rs
//! Frame tick handler

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                self.ui.tick(Instant::now());
                Some(Task::none())
            }
            _ => None,
        }
    }
}
