use core::ops::{Add, Sub};

/// Immutable 2D/3D displacement in integer pixels.
///
/// Used to place sub-sprites relative to their parent. The `z` component
/// defaults to 0 and only participates in distance math, not 2D positioning.
///
/// Arithmetic is defined between two `Offset` values only; mixing with other
/// types does not compile.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// 2D constructor; `z` is 0.
    #[inline]
    pub const fn xy(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Cheaper than [`distance_to`](Self::distance_to) when only comparing
    /// magnitudes. Defined for any pair of offsets: differences are widened
    /// before squaring, and results past `i64::MAX` (full-range `i32`
    /// displacements) saturate rather than overflow.
    #[inline]
    pub fn distance_squared_to(self, other: Offset) -> i64 {
        let dx = (self.x as i64 - other.x as i64) as i128;
        let dy = (self.y as i64 - other.y as i64) as i128;
        let dz = (self.z as i64 - other.z as i64) as i128;
        (dx * dx + dy * dy + dz * dz).min(i64::MAX as i128) as i64
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Offset) -> f64 {
        (self.distance_squared_to(other) as f64).sqrt()
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Offset {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_componentwise() {
        let a = Offset::new(2, 1, 3);
        let b = Offset::new(5, 4, -1);
        assert_eq!(a + b, Offset::new(7, 5, 2));
    }

    #[test]
    fn add_negative() {
        let a = Offset::xy(2, 1);
        let b = Offset::xy(-7, -2);
        assert_eq!(a + b, Offset::xy(-5, -1));
    }

    #[test]
    fn sub_componentwise() {
        let a = Offset::new(7, 1, 2);
        let b = Offset::new(5, 4, 2);
        assert_eq!(a - b, Offset::new(2, -3, 0));
    }

    #[test]
    fn add_then_sub_round_trips() {
        let a = Offset::new(12, -7, 3);
        let b = Offset::new(-4, 9, 1);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn xy_defaults_z_to_zero() {
        assert_eq!(Offset::xy(3, 4).z, 0);
        assert_eq!(Offset::xy(3, 4), Offset::new(3, 4, 0));
    }

    // ── distance ──────────────────────────────────────────────────────────

    #[test]
    fn distance_squared_2d() {
        let a = Offset::xy(0, 0);
        let b = Offset::xy(3, 4);
        assert_eq!(a.distance_squared_to(b), 25);
    }

    #[test]
    fn distance_squared_with_z() {
        let a = Offset::new(1, 1, 1);
        let b = Offset::new(3, 3, 3);
        assert_eq!(a.distance_squared_to(b), 12);
    }

    #[test]
    fn distance_is_sqrt_of_squared() {
        let a = Offset::xy(0, 0);
        let b = Offset::xy(3, 4);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn distance_symmetric() {
        let a = Offset::new(10, -2, 4);
        let b = Offset::new(-3, 8, 0);
        assert_eq!(a.distance_squared_to(b), b.distance_squared_to(a));
    }

    #[test]
    fn distance_squared_exact_for_large_values() {
        // 3e9 per axis; the square (9e18) still fits in i64.
        let a = Offset::xy(2_000_000_000, 0);
        let b = Offset::xy(-1_000_000_000, 0);
        assert_eq!(a.distance_squared_to(b), 9_000_000_000_000_000_000);
    }

    #[test]
    fn distance_squared_saturates_at_full_range() {
        let a = Offset::new(i32::MAX, i32::MAX, i32::MAX);
        let b = Offset::new(i32::MIN, i32::MIN, i32::MIN);
        assert_eq!(a.distance_squared_to(b), i64::MAX);
        assert!(a.distance_to(b).is_finite());
    }
}
