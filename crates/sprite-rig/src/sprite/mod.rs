//! Base sprite and render-list types.
//!
//! Responsibilities:
//! - hold per-sprite state the extension layer depends on (position, size,
//!   z-height, list membership)
//! - provide shared, clonable sprite handles (`Rc`-based; the crate is
//!   single-threaded and cooperative with the host game loop)
//! - keep list membership bidirectional so a sprite can be dropped from
//!   every list it belongs to in one call
//!
//! A renderer consumes a [`SpriteList`] each frame in iteration order; this
//! crate never draws anything itself.

mod base;
mod list;

pub(crate) use list::ListInner;

pub use base::{Sprite, SpriteHandle};
pub use list::SpriteList;
