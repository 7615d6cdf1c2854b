//! Top-level presentation phases
//!
//! The greeting runs landing → flow → surprise and never goes back.

/// One of the three full-screen phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Phase {
    /// Intro screen with the "begin" action
    #[default]
    Landing,
    /// Paged message flow
    Flow,
    /// Gift reveal and finale
    Surprise,
}

impl Phase {
    /// The phase that follows this one, if any
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Landing => Some(Phase::Flow),
            Phase::Flow => Some(Phase::Surprise),
            Phase::Surprise => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Landing => write!(f, "landing"),
            Phase::Flow => write!(f, "flow"),
            Phase::Surprise => write!(f, "surprise"),
        }
    }
}

/// Holds the current phase and moves it forward on request
#[derive(Debug, Clone, Default)]
pub struct PhaseController {
    phase: Phase,
}

impl PhaseController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advance to the next phase
    ///
    /// Returns the phase entered, or `None` when already terminal.
    pub fn advance(&mut self) -> Option<Phase> {
        let next = self.phase.next()?;
        tracing::info!("Phase {} -> {}", self.phase, next);
        self.phase = next;
        Some(next)
    }
}
