use crate::sprite::{SpriteHandle, SpriteList};

/// A render list kept in non-decreasing z-height order.
///
/// Each [`push`](Self::push) appends and then stably re-sorts the whole list.
/// Lists are small (tens to low hundreds of sprites) and appends are rare
/// next to per-frame iteration, so a full O(n log n) re-sort beats
/// maintaining an insertion point.
///
/// Changing a sprite's z-height after it is in the list does **not** reorder
/// the list; call [`resort`](Self::resort) when that happens.
#[derive(Debug, Clone, Default)]
pub struct DepthOrderedList {
    list: SpriteList,
}

impl DepthOrderedList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `sprite` and restores z-height order.
    ///
    /// Stable: among sprites of equal z-height the newcomer lands last.
    /// No-op (no re-sort either) if the sprite is already a member.
    pub fn push(&self, sprite: &SpriteHandle) {
        if self.list.contains(sprite) {
            return;
        }
        self.list.push(sprite);
        self.resort();
    }

    /// Re-sorts the list by z-height, stably.
    ///
    /// Needed after mutating a member's z-height in place.
    pub fn resort(&self) {
        self.list.sort_by(|a, b| a.z_height().cmp(&b.z_height()));
    }

    /// Removes `sprite`. Order of the remaining sprites is unchanged.
    #[inline]
    pub fn remove(&self, sprite: &SpriteHandle) -> bool {
        self.list.remove(sprite)
    }

    #[inline]
    pub fn contains(&self, sprite: &SpriteHandle) -> bool {
        self.list.contains(sprite)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Snapshot in draw order (back to front).
    #[inline]
    pub fn sprites(&self) -> Vec<SpriteHandle> {
        self.list.sprites()
    }

    /// The underlying list, e.g. for
    /// [`CompositeSprite::register_in_list`](crate::composite::CompositeSprite::register_in_list).
    ///
    /// Sprites pushed through it directly land at the end regardless of
    /// z-height until the next [`push`](Self::push) or [`resort`](Self::resort).
    #[inline]
    pub fn list(&self) -> &SpriteList {
        &self.list
    }
}

#[cfg(test)]
mod tests {
    use crate::sprite::Sprite;

    use super::*;

    fn sprite_at_z(z: f32) -> SpriteHandle {
        Sprite::new(0.0, 0.0).with_z_height(z).into_handle()
    }

    fn z_order(list: &DepthOrderedList) -> Vec<f32> {
        list.sprites().iter().map(|s| s.z_height().0).collect()
    }

    #[test]
    fn appends_keep_ascending_order() {
        let list = DepthOrderedList::new();
        for z in [3.0, 1.0, 2.0] {
            list.push(&sprite_at_z(z));
        }
        assert_eq!(z_order(&list), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let list = DepthOrderedList::new();
        for z in [3.0, 1.0, 2.0] {
            list.push(&sprite_at_z(z));
        }
        let first_two = sprite_at_z(2.0);
        list.push(&first_two);

        assert_eq!(z_order(&list), vec![1.0, 2.0, 2.0, 3.0]);
        // The newcomer sits after the z=2 sprite that was already present.
        assert!(list.sprites()[2].ptr_eq(&first_two));
    }

    #[test]
    fn default_z_height_sorts_as_zero() {
        let list = DepthOrderedList::new();
        list.push(&sprite_at_z(5.0));
        let unlayered = Sprite::new(0.0, 0.0).into_handle();
        list.push(&unlayered);
        assert_eq!(z_order(&list), vec![0.0, 5.0]);
    }

    #[test]
    fn z_height_mutation_waits_for_resort() {
        let list = DepthOrderedList::new();
        let a = sprite_at_z(1.0);
        let b = sprite_at_z(2.0);
        list.push(&a);
        list.push(&b);

        a.set_z_height(9.0);
        assert!(list.sprites()[0].ptr_eq(&a), "no reorder before resort");

        list.resort();
        assert_eq!(z_order(&list), vec![2.0, 9.0]);
    }

    #[test]
    fn next_push_also_restores_order_after_mutation() {
        let list = DepthOrderedList::new();
        let a = sprite_at_z(1.0);
        list.push(&a);
        list.push(&sprite_at_z(2.0));

        a.set_z_height(9.0);
        list.push(&sprite_at_z(3.0));
        assert_eq!(z_order(&list), vec![2.0, 3.0, 9.0]);
    }

    #[test]
    fn remove_keeps_order() {
        let list = DepthOrderedList::new();
        let mid = sprite_at_z(2.0);
        list.push(&sprite_at_z(1.0));
        list.push(&mid);
        list.push(&sprite_at_z(3.0));

        assert!(list.remove(&mid));
        assert_eq!(z_order(&list), vec![1.0, 3.0]);
    }
}
