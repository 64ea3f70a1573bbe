use core::cmp::Ordering;

/// Draw-order key for sprites sharing a render list.
///
/// Higher values draw later (on top). Every sprite carries one; the default
/// of 0 stands in for "no particular layer".
///
/// Ordering is total (`f32::total_cmp`), so NaN keys cannot poison a sort.
#[derive(Debug, Copy, Clone, Default)]
pub struct ZHeight(pub f32);

impl ZHeight {
    #[inline]
    pub const fn new(v: f32) -> Self {
        Self(v)
    }
}

impl From<f32> for ZHeight {
    #[inline]
    fn from(v: f32) -> Self {
        Self(v)
    }
}

impl PartialEq for ZHeight {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for ZHeight {}

impl Ord for ZHeight {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for ZHeight {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
