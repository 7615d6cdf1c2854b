//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets are generic over the message type and never import
//! `crate::app` directly; pages decide what each press means.

mod buttons;
mod progress;
mod toast;

pub use buttons::{gold_button, music_button, romantic_button};
pub use progress::{heart_dots, progress_bar};
pub use toast::{Toast, view_toast};
