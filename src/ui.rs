//! UI module for the greeting
//! Deep plum background with rose and gold accents
//!
//! # Architecture
//!
//! - **Effects** (`effects`): canvas programs for particles and the gift box
//! - **Widgets** (`widgets`): styled pieces generic over the message type
//! - **Pages** (`pages`): one full-window view per phase

pub mod animation;
pub mod effects;
pub mod pages;
pub mod theme;
pub mod widgets;

pub use effects::ParticleLayer;
