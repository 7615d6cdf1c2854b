//! Feature modules - presentation logic separated from UI
//!
//! Each feature module holds the state machine for one part of the
//! greeting. Features should not depend on UI components directly.

pub mod flow;
pub mod phase;
pub mod reveal;
pub mod settings;

pub use flow::{FlowState, MessagePager, PageAdvance};
pub use phase::{Phase, PhaseController};
pub use reveal::{RevealSequencer, Stage};
pub use settings::Settings;
