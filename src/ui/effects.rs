//! Decorative effects drawn on iced canvases
//!
//! - `particles`: randomized particle layouts and their animation curves
//! - `particle_field`: canvas program rendering one particle layer
//! - `gift_box`: the gift box of the reveal

pub mod gift_box;
pub mod particle_field;
pub mod particles;

pub use particle_field::ParticleLayer;
