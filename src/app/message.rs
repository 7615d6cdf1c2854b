//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::Stage;

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Frames ============
    /// Redraw tick for particles and fades
    AnimationTick,

    // ============ Phases ============
    /// "Tap to Begin" on the landing page
    BeginPressed,
    /// "I'm ready" on the flow intro
    ReadyPressed,
    /// Next note, or the surprise after the last one
    NextPressed,

    // ============ Reveal ============
    /// "Open Your Gift"
    OpenGiftPressed,
    /// One-shot timer armed when the given stage was entered
    StageTimerElapsed(Stage),
    /// "Thank You For Reading"
    FinishedReadingPressed,
    /// The finale music fade has had time to finish
    FinaleFadeElapsed,

    // ============ Music ============
    /// Reconcile the music button with the output state
    MusicPoll,
    /// Advance a running music fade
    MusicFadeTick,
    /// Floating music button
    ToggleMusic,
    /// Hide the "music is playing" toast
    HideToast,

    // ============ Input & Window ============
    KeyPressed(Key, Modifiers),
    /// Window close button
    RequestClose,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages
            Self::AnimationTick => simple!("AnimationTick"),
            Self::MusicPoll => simple!("MusicPoll"),
            Self::MusicFadeTick => simple!("MusicFadeTick"),

            Self::BeginPressed => simple!("BeginPressed"),
            Self::ReadyPressed => simple!("ReadyPressed"),
            Self::NextPressed => simple!("NextPressed"),
            Self::OpenGiftPressed => simple!("OpenGiftPressed"),
            Self::StageTimerElapsed(stage) => simple!("StageTimerElapsed", "{:?}", stage),
            Self::FinishedReadingPressed => simple!("FinishedReadingPressed"),
            Self::FinaleFadeElapsed => simple!("FinaleFadeElapsed"),
            Self::ToggleMusic => simple!("ToggleMusic"),
            Self::HideToast => simple!("HideToast"),
            Self::KeyPressed(key, _) => simple!("KeyPressed", "{:?}", key),
            Self::RequestClose => simple!("RequestClose"),
        }
    }
}
