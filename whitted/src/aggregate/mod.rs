use crate::{ray::Ray, shape::Hit};

pub mod shapelist;
pub use shapelist::ShapeList;

/// A collection of shapes queried as a single object.
pub trait Aggregate {
    /// The intersection with the smallest `t` within the ray's bounds.
    ///
    /// Selection is order-independent: permuting the underlying shapes must
    /// not change which intersection is returned.
    fn first_hit(&self, ray: Ray) -> Hit;

    /// Whether anything intersects the ray within its bounds.
    ///
    /// Equivalent to `first_hit(ray)` being a hit, but free to stop at the
    /// first intersection found.
    fn is_occluded(&self, ray: Ray) -> bool;
}
