//! Helpers for querying sprites in a list.

mod at_point;

pub use at_point::{sprites_at_point, sprites_at_point_where};
