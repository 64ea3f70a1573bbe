use crate::coords::Offset;
use crate::sprite::{SpriteHandle, SpriteList};

/// Every sprite in `list` whose bounds contain `point`, in list order.
///
/// A sprite whose center is elsewhere but whose bounds touch the point still
/// matches.
pub fn sprites_at_point(point: Offset, list: &SpriteList) -> Vec<SpriteHandle> {
    sprites_at_point_where(point, list, |_| true)
}

/// Like [`sprites_at_point`], keeping only sprites for which `pred` holds.
///
/// The predicate replaces class-based filtering: callers discriminate however
/// they tag their sprites (z-height band, membership in another list, ...).
pub fn sprites_at_point_where(
    point: Offset,
    list: &SpriteList,
    pred: impl Fn(&SpriteHandle) -> bool,
) -> Vec<SpriteHandle> {
    let (px, py) = (point.x as f32, point.y as f32);
    list.sprites()
        .into_iter()
        .filter(|s| s.contains_point(px, py) && pred(s))
        .collect()
}
