use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use super::SpriteHandle;

#[derive(Debug, Default)]
pub(crate) struct ListInner {
    pub(crate) sprites: Vec<SpriteHandle>,
}

/// An ordered, shared list of sprites — the unit a renderer iterates each
/// frame.
///
/// Cloning a `SpriteList` clones the reference; all clones see the same
/// contents. Membership is set-like per list (pushing a handle that is
/// already present is a no-op) and keyed on handle identity.
///
/// Pushing also records a back-reference on the sprite, so
/// [`SpriteHandle::remove_from_all_lists`] can find every list without the
/// caller tracking them.
#[derive(Debug, Clone, Default)]
pub struct SpriteList {
    inner: Rc<RefCell<ListInner>>,
}

impl SpriteList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_inner(inner: Rc<RefCell<ListInner>>) -> Self {
        Self { inner }
    }

    /// Appends `sprite` to the end of the list.
    ///
    /// No-op if the sprite is already a member.
    pub fn push(&self, sprite: &SpriteHandle) {
        if self.contains(sprite) {
            return;
        }
        self.inner.borrow_mut().sprites.push(sprite.clone());
        sprite.0.borrow_mut().lists.push(Rc::downgrade(&self.inner));
        log::trace!("sprite appended to list (len {})", self.len());
    }

    /// Removes `sprite` from the list. Returns whether it was a member.
    pub fn remove(&self, sprite: &SpriteHandle) -> bool {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.sprites.len();
            inner.sprites.retain(|s| !s.ptr_eq(sprite));
            inner.sprites.len() != before
        };
        if removed {
            sprite
                .0
                .borrow_mut()
                .lists
                .retain(|w| !std::ptr::eq(w.as_ptr(), Rc::as_ptr(&self.inner)));
        }
        removed
    }

    #[inline]
    pub fn contains(&self, sprite: &SpriteHandle) -> bool {
        self.inner.borrow().sprites.iter().any(|s| s.ptr_eq(sprite))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.borrow().sprites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().sprites.is_empty()
    }

    /// Snapshot of the current contents in iteration order.
    ///
    /// Handles are cheap reference clones; the snapshot does not observe
    /// later list mutation.
    pub fn sprites(&self) -> Vec<SpriteHandle> {
        self.inner.borrow().sprites.clone()
    }

    /// Stably sorts the list in place with `cmp`.
    ///
    /// Sprites comparing equal keep their current relative order.
    pub fn sort_by(&self, mut cmp: impl FnMut(&SpriteHandle, &SpriteHandle) -> Ordering) {
        self.inner.borrow_mut().sprites.sort_by(&mut cmp);
    }

    /// Whether two `SpriteList` values refer to the same underlying list.
    #[inline]
    pub fn ptr_eq(&self, other: &SpriteList) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
