//! Pages module
//! One full-window view per phase

pub mod flow;
pub mod landing;
pub mod surprise;
