//! Pixel-art sprite frames for the runner game's player character.
//!
//! Every pose is a fixed, ordered list of rectangle fills on a 16x24 grid,
//! scaled up and written out as transparent PNGs.

pub mod core;
pub mod error;
pub mod renderer;
