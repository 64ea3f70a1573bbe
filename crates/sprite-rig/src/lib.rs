//! Extension layer for 2D sprite pipelines.
//!
//! Two independent capabilities over a base sprite / render-list pair:
//!
//! - [`CompositeSprite`]: a parent sprite with named sub-sprites that move
//!   with it and share its render-list membership.
//! - [`DepthOrderedList`]: a render list kept in ascending [`ZHeight`] order
//!   as sprites are appended, so draw order is correct without the caller
//!   re-sorting.
//!
//! Plus the pieces they compose over: [`Sprite`] / [`SpriteHandle`] /
//! [`SpriteList`] base types, [`Offset`] displacements, and point-query
//! helpers in [`tools`]. Rendering itself stays with the host engine — it
//! iterates a list each frame and draws; this crate only manages what is in
//! the lists and in what order.
//!
//! Everything is single-threaded and synchronous, designed to run inside the
//! host game loop's update phase.
//!
//! # Quick start
//!
//! ```rust
//! use sprite_rig::{CompositeSprite, DepthOrderedList, Offset, Sprite, SpriteNode};
//!
//! let scene = DepthOrderedList::new();
//!
//! let mut body = CompositeSprite::new(Sprite::new(100.0, 100.0).into_handle());
//! body.add_sub_sprite(
//!     "hat",
//!     Sprite::new(0.0, 0.0).with_z_height(1.0).into_handle(),
//!     Offset::xy(0, 12),
//! )?;
//!
//! body.register_in_list(scene.list());
//! scene.resort();
//!
//! body.set_position(104.0, 100.0);
//! assert_eq!(body.get_sub_sprite("hat")?.anchor().position(), (104.0, 112.0));
//! # Ok::<(), sprite_rig::RigError>(())
//! ```

pub mod composite;
pub mod coords;
pub mod depth;
pub mod error;
pub mod logging;
pub mod sprite;
pub mod tools;

pub use composite::{CompositeSprite, SpriteNode};
pub use coords::Offset;
pub use depth::{DepthOrderedList, ZHeight};
pub use error::{Result, RigError};
pub use sprite::{Sprite, SpriteHandle, SpriteList};
