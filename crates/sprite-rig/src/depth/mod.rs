//! Depth-ordered drawing.
//!
//! Responsibilities:
//! - define the z-height draw-order key ([`ZHeight`])
//! - keep a render list in non-decreasing z-height order as sprites are
//!   appended ([`DepthOrderedList`])
//!
//! Ordering is stable: sprites with equal z-height keep their insertion
//! order. Higher z-heights iterate later and so draw on top.

mod list;
mod z_height;

pub use list::DepthOrderedList;
pub use z_height::ZHeight;
