//! Displacement types for positioning sprites relative to each other.
//!
//! Canonical space matches the host render pipeline:
//! - integer logical pixels
//! - +X right, +Y up (screen space of the sprite engine)
//! - z is a layer displacement, unused for 2D positioning

mod offset;

pub use offset::Offset;
