use crate::sprite::{SpriteHandle, SpriteList};

/// Anything that can hang off a [`CompositeSprite`](super::CompositeSprite)
/// as a sub-sprite: a plain sprite handle or a whole nested composite.
pub trait SpriteNode {
    /// The sprite that carries this node's position and list membership
    /// (for a composite, its parent sprite).
    fn anchor(&self) -> SpriteHandle;

    /// Moves the node to `(x, y)`. Composites propagate to their children.
    fn set_position(&self, x: f32, y: f32);

    /// Appends the node (and, for composites, every descendant) to `list`.
    fn add_to_list(&self, list: &SpriteList);

    /// Removes the node (and every descendant) from all lists it belongs to.
    fn remove_from_all_lists(&self);

    /// Appends this node's sprites to `out`, depth-first, self before
    /// children.
    fn collect_sprites(&self, out: &mut Vec<SpriteHandle>);
}

impl SpriteNode for SpriteHandle {
    #[inline]
    fn anchor(&self) -> SpriteHandle {
        self.clone()
    }

    #[inline]
    fn set_position(&self, x: f32, y: f32) {
        SpriteHandle::set_position(self, x, y);
    }

    #[inline]
    fn add_to_list(&self, list: &SpriteList) {
        list.push(self);
    }

    #[inline]
    fn remove_from_all_lists(&self) {
        SpriteHandle::remove_from_all_lists(self);
    }

    #[inline]
    fn collect_sprites(&self, out: &mut Vec<SpriteHandle>) {
        out.push(self.clone());
    }
}
