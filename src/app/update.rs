//! Message update handlers - thin dispatcher delegating to submodules

mod animation;
mod keyboard;
mod music;
mod phase;
mod reveal;
mod window;

use std::time::Duration;

use iced::Task;
use iced::task::Handle;

use super::{App, Message};

/// One-shot delayed message that is cancelled when its handle is dropped
pub(crate) fn delayed(delay: Duration, message: Message) -> (Task<Message>, Handle) {
    let sleep = async move {
        tokio::time::sleep(delay).await;
    };
    let (task, handle) = Task::perform(sleep, move |()| message).abortable();
    (task, handle.abort_on_drop())
}

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_animation(&message) {
            return task;
        }
        if let Some(task) = self.handle_phase(&message) {
            return task;
        }
        if let Some(task) = self.handle_reveal(&message) {
            return task;
        }
        if let Some(task) = self.handle_music(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
