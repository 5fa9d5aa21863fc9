//! Deterministic ASCII art for sardines and their cans.
//!
//! Everything here is pure: the same inputs always produce the same text.
//! Widths are counted in `char`s so glyphs like `º` and `─` line up in a
//! monospaced font.

pub mod can;
pub mod fish;
pub mod mascot;

pub use can::render_can;
pub use fish::{Mouth, render_fish};
pub use mascot::{MascotState, render_mascot};
