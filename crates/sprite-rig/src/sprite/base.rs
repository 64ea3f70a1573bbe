use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::depth::ZHeight;

use super::ListInner;
use super::SpriteList;

/// A positioned 2D game entity.
///
/// Position is the sprite's center in logical pixels. `width`/`height` exist
/// for point queries and default to 0, so a freshly constructed sprite only
/// overlaps its exact center until a size is set.
///
/// Sprites are shared through [`SpriteHandle`]; construct one, configure it
/// with the builder methods, then call [`into_handle`](Self::into_handle).
#[derive(Debug)]
pub struct Sprite {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) z_height: ZHeight,

    /// Back-references to every list this sprite belongs to. Weak so that a
    /// dropped list does not keep sprites alive (and vice versa).
    pub(crate) lists: Vec<Weak<RefCell<ListInner>>>,
}

impl Sprite {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: 0.0,
            height: 0.0,
            z_height: ZHeight::default(),
            lists: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_z_height(mut self, z: impl Into<ZHeight>) -> Self {
        self.z_height = z.into();
        self
    }

    #[inline]
    pub fn into_handle(self) -> SpriteHandle {
        SpriteHandle(Rc::new(RefCell::new(self)))
    }
}

/// Shared handle to a [`Sprite`].
///
/// Cloning the handle clones the reference, not the sprite; two clones refer
/// to the same entity. Identity is handle identity (see [`ptr_eq`](Self::ptr_eq)),
/// which is also what list membership is keyed on.
#[derive(Debug, Clone)]
pub struct SpriteHandle(pub(crate) Rc<RefCell<Sprite>>);

impl SpriteHandle {
    #[inline]
    pub fn new(sprite: Sprite) -> Self {
        sprite.into_handle()
    }

    /// Whether two handles refer to the same sprite.
    #[inline]
    pub fn ptr_eq(&self, other: &SpriteHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    #[inline]
    pub fn position(&self) -> (f32, f32) {
        let s = self.0.borrow();
        (s.x, s.y)
    }

    /// Moves the sprite's center.
    ///
    /// For a sprite that is the parent of a composite, use the composite's
    /// position setter instead so sub-sprites move with it.
    #[inline]
    pub fn set_position(&self, x: f32, y: f32) {
        let mut s = self.0.borrow_mut();
        s.x = x;
        s.y = y;
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        let s = self.0.borrow();
        (s.width, s.height)
    }

    #[inline]
    pub fn set_size(&self, width: f32, height: f32) {
        let mut s = self.0.borrow_mut();
        s.width = width;
        s.height = height;
    }

    #[inline]
    pub fn z_height(&self) -> ZHeight {
        self.0.borrow().z_height
    }

    /// Sets the draw-order key.
    ///
    /// Lists the sprite already belongs to are not reordered; see
    /// [`DepthOrderedList::resort`](crate::depth::DepthOrderedList::resort).
    #[inline]
    pub fn set_z_height(&self, z: impl Into<ZHeight>) {
        self.0.borrow_mut().z_height = z.into();
    }

    /// Whether `(px, py)` falls inside the sprite's bounds (center ± half
    /// extents, edges inclusive).
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        let s = self.0.borrow();
        (px - s.x).abs() * 2.0 <= s.width && (py - s.y).abs() * 2.0 <= s.height
    }

    /// Removes this sprite from every list it belongs to.
    pub fn remove_from_all_lists(&self) {
        let lists = std::mem::take(&mut self.0.borrow_mut().lists);
        for weak in lists {
            if let Some(inner) = weak.upgrade() {
                inner
                    .borrow_mut()
                    .sprites
                    .retain(|s| !Rc::ptr_eq(&s.0, &self.0));
            }
        }
        log::trace!("sprite removed from all lists");
    }

    /// Every list this sprite currently belongs to.
    pub fn lists(&self) -> Vec<SpriteList> {
        self.0
            .borrow()
            .lists
            .iter()
            .filter_map(Weak::upgrade)
            .map(SpriteList::from_inner)
            .collect()
    }

    /// Number of lists this sprite currently belongs to.
    #[inline]
    pub fn list_count(&self) -> usize {
        self.0.borrow().lists.iter().filter(|w| w.strong_count() > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_clones_share_state() {
        let a = Sprite::new(1.0, 2.0).into_handle();
        let b = a.clone();
        b.set_position(5.0, 6.0);
        assert_eq!(a.position(), (5.0, 6.0));
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn distinct_sprites_are_not_ptr_eq() {
        let a = Sprite::new(0.0, 0.0).into_handle();
        let b = Sprite::new(0.0, 0.0).into_handle();
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn contains_point_inclusive_edges() {
        let s = Sprite::new(10.0, 10.0).with_size(4.0, 6.0).into_handle();
        assert!(s.contains_point(10.0, 10.0));
        assert!(s.contains_point(12.0, 13.0));
        assert!(s.contains_point(8.0, 7.0));
        assert!(!s.contains_point(12.1, 10.0));
        assert!(!s.contains_point(10.0, 13.1));
    }

    #[test]
    fn zero_size_sprite_contains_only_its_center() {
        let s = Sprite::new(3.0, 4.0).into_handle();
        assert!(s.contains_point(3.0, 4.0));
        assert!(!s.contains_point(3.5, 4.0));
    }
}
