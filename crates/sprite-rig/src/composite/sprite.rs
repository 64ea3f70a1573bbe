use std::collections::HashMap;

use crate::coords::Offset;
use crate::error::{Result, RigError};
use crate::sprite::{SpriteHandle, SpriteList};

use super::SpriteNode;

struct Child {
    node: Box<dyn SpriteNode>,
    offset: Offset,
}

/// A parent sprite with named sub-sprites that move and appear with it.
///
/// Each sub-sprite is registered under a unique name with an [`Offset`] from
/// the parent. Moving the composite through [`set_position`](Self::set_position)
/// keeps every child at parent + offset; adding the parent to a render list
/// through [`register_in_list`](Self::register_in_list) brings every child
/// along.
///
/// Position synchronization is cooperative, not enforced: moving a child
/// directly (or the parent through its raw [`SpriteHandle`]) leaves children
/// out of place until the next composite move. The same goes for mutating a
/// render list behind the composite's back.
pub struct CompositeSprite {
    parent: SpriteHandle,
    children: HashMap<String, Child>,
}

impl CompositeSprite {
    /// Wraps `parent` with an empty sub-sprite registry.
    pub fn new(parent: SpriteHandle) -> Self {
        Self {
            parent,
            children: HashMap::new(),
        }
    }

    /// The parent sprite.
    #[inline]
    pub fn parent(&self) -> &SpriteHandle {
        &self.parent
    }

    /// The parent's position.
    #[inline]
    pub fn position(&self) -> (f32, f32) {
        self.parent.position()
    }

    /// Registers `node` as a sub-sprite named `name`, `offset` away from the
    /// parent.
    ///
    /// The child is positioned at parent + offset immediately, and appended
    /// to every render list the parent currently belongs to.
    ///
    /// # Errors
    /// [`RigError::DuplicateName`] if `name` is already registered; the
    /// existing registration is left untouched.
    pub fn add_sub_sprite(
        &mut self,
        name: impl Into<String>,
        node: impl SpriteNode + 'static,
        offset: Offset,
    ) -> Result<()> {
        let name = name.into();
        if self.children.contains_key(&name) {
            return Err(RigError::DuplicateName(name));
        }

        let (px, py) = self.parent.position();
        node.set_position(px + offset.x as f32, py + offset.y as f32);
        for list in self.parent.lists() {
            node.add_to_list(&list);
        }

        log::debug!("sub-sprite \"{name}\" registered at offset ({}, {})", offset.x, offset.y);
        self.children.insert(name, Child { node: Box::new(node), offset });
        Ok(())
    }

    /// Unregisters the sub-sprite named `name` and removes it from every
    /// render list it belongs to.
    ///
    /// # Errors
    /// [`RigError::NameNotFound`] if `name` is not registered.
    pub fn remove_sub_sprite(&mut self, name: &str) -> Result<()> {
        let child = self
            .children
            .remove(name)
            .ok_or_else(|| RigError::NameNotFound(name.to_owned()))?;
        child.node.remove_from_all_lists();
        log::debug!("sub-sprite \"{name}\" removed");
        Ok(())
    }

    /// The sub-sprite registered under `name` — the live node, not a copy.
    ///
    /// Callers may mutate the sprite's visual state through its anchor, but
    /// should reposition it only through the composite's
    /// [`set_position`](Self::set_position).
    ///
    /// # Errors
    /// [`RigError::NameNotFound`] if `name` is not registered.
    pub fn get_sub_sprite(&self, name: &str) -> Result<&dyn SpriteNode> {
        self.children
            .get(name)
            .map(|c| &*c.node)
            .ok_or_else(|| RigError::NameNotFound(name.to_owned()))
    }

    /// Mutable access to the sub-sprite registered under `name`.
    ///
    /// # Errors
    /// [`RigError::NameNotFound`] if `name` is not registered.
    pub fn get_sub_sprite_mut(&mut self, name: &str) -> Result<&mut dyn SpriteNode> {
        self.children
            .get_mut(name)
            .map(|c| &mut *c.node as &mut dyn SpriteNode)
            .ok_or_else(|| RigError::NameNotFound(name.to_owned()))
    }

    /// Whether a sub-sprite is registered under `name`.
    #[inline]
    pub fn sub_sprite_exists(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Number of directly registered sub-sprites.
    #[inline]
    pub fn sub_sprite_count(&self) -> usize {
        self.children.len()
    }

    /// The parent plus every descendant as a flat list, nested composites
    /// included, depth-first with each parent before its children. Sibling
    /// order is unspecified.
    ///
    /// Useful for bulk operations over the whole assembly.
    pub fn get_all_sprites(&self) -> Vec<SpriteHandle> {
        let mut out = Vec::new();
        self.collect_sprites(&mut out);
        out
    }

    /// Moves the parent to `(x, y)` and every sub-sprite to `(x, y)` + its
    /// offset, recursively through nested composites.
    ///
    /// This is the only way to move the assembly that preserves the
    /// parent-plus-offset layout.
    pub fn set_position(&self, x: f32, y: f32) {
        self.parent.set_position(x, y);
        for child in self.children.values() {
            child
                .node
                .set_position(x + child.offset.x as f32, y + child.offset.y as f32);
        }
    }

    /// Appends the parent and every sub-sprite to `list`, so the whole
    /// assembly becomes visible in it at once. Idempotent per list.
    pub fn register_in_list(&self, list: &SpriteList) {
        list.push(&self.parent);
        for child in self.children.values() {
            child.node.add_to_list(list);
        }
    }

    /// Removes the parent and every sub-sprite from all render lists they
    /// belong to.
    ///
    /// The sub-sprite registry itself is kept: the composite can be detached
    /// from rendering and later re-registered wholesale through
    /// [`register_in_list`](Self::register_in_list) without rebuilding its
    /// structure.
    pub fn remove_from_all_lists(&self) {
        self.parent.remove_from_all_lists();
        for child in self.children.values() {
            child.node.remove_from_all_lists();
        }
    }
}

impl SpriteNode for CompositeSprite {
    #[inline]
    fn anchor(&self) -> SpriteHandle {
        self.parent.clone()
    }

    #[inline]
    fn set_position(&self, x: f32, y: f32) {
        CompositeSprite::set_position(self, x, y);
    }

    #[inline]
    fn add_to_list(&self, list: &SpriteList) {
        self.register_in_list(list);
    }

    #[inline]
    fn remove_from_all_lists(&self) {
        CompositeSprite::remove_from_all_lists(self);
    }

    fn collect_sprites(&self, out: &mut Vec<SpriteHandle>) {
        out.push(self.parent.clone());
        for child in self.children.values() {
            child.node.collect_sprites(out);
        }
    }
}
