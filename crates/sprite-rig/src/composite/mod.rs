//! Composite sprites.
//!
//! Responsibilities:
//! - keep a parent sprite and its named sub-sprites moving as one unit
//! - keep sub-sprites' render-list membership in step with the parent's
//! - flatten a composite (recursively) for bulk operations
//!
//! A sub-sprite can itself be a [`CompositeSprite`]; the [`SpriteNode`] trait
//! is the seam that makes plain handles and nested composites interchangeable
//! in the registry.

mod node;
mod sprite;

pub use node::SpriteNode;
pub use sprite::CompositeSprite;
