use crate::{
    math::vec::Vec3,
    ray::Ray,
    texture::{TextureId, Uv},
};

pub mod sphere;
pub use sphere::Sphere;

/// Everything shading needs about a ray-surface intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub t: f32,
    pub hit_point: Vec3,
    pub normal: Vec3,
    pub texture: TextureId,
    pub uv: Uv,
}

/// A miss is an expected outcome, not an error.
#[derive(Debug)]
pub enum Hit {
    Hit(HitRecord),
    NoHit,
}

impl Hit {
    pub fn record(self) -> Option<HitRecord> {
        match self {
            Hit::Hit(record) => Some(record),
            Hit::NoHit => None,
        }
    }
}

/// A geometric primitive that can be raytraced.
///
/// Implementations must only report intersections whose `t` lies within the
/// ray's bounds, and must return unit-length normals.
pub trait Shape: Send + Sync {
    fn hit(&self, ray: &Ray) -> Hit;
}
