use crate::{
    math::{utils::sphere_uv_from_direction, vec::Vec3},
    ray::Ray,
    texture::TextureId,
};

use super::{Hit, HitRecord, Shape};

/// A sphere with outward-pointing normals.
///
/// A ray starting strictly inside the sphere hits immediately at `t = 0`,
/// with the normal facing back along the ray so the inner surface faces the
/// viewer.
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub texture: TextureId,
}

impl Shape for Sphere {
    fn hit(&self, ray: &Ray) -> Hit {
        let local_origin = ray.origin - self.center;

        if local_origin.length_squared() < self.radius * self.radius {
            if !ray.range().contains(&0.0) {
                return Hit::NoHit;
            }
            // Sitting exactly on the center leaves no meaningful local
            // direction; fall back to the view direction for UV purposes.
            let local_dir = local_origin.try_normalize().unwrap_or(-ray.direction);
            return Hit::Hit(HitRecord {
                t: 0.0,
                hit_point: ray.origin,
                normal: -ray.direction,
                texture: self.texture,
                uv: sphere_uv_from_direction(local_dir),
            });
        }

        let a = ray.direction.length_squared();
        let b_half = local_origin.dot(ray.direction);
        let c = local_origin.length_squared() - self.radius * self.radius;

        let discriminant_quarter = b_half * b_half - a * c;
        if discriminant_quarter < 0.0 {
            return Hit::NoHit;
        }

        // A tangent ray has a zero discriminant and both roots collapse into
        // one; it goes through the same selection as the generic case.
        let sqrt_disc = f32::sqrt(discriminant_quarter);
        let t = {
            let t = (-b_half - sqrt_disc) / a;
            if ray.range().contains(&t) {
                t
            } else {
                let t = (-b_half + sqrt_disc) / a;
                if !ray.range().contains(&t) {
                    return Hit::NoHit;
                }
                t
            }
        };

        let hit_point = ray.at(t);
        // The implicit-surface gradient at the hit point is radial, so the
        // normalized local hit point is the exact normal.
        let normal = (hit_point - self.center).normalize();
        Hit::Hit(HitRecord {
            t,
            hit_point,
            normal,
            texture: self.texture,
            uv: sphere_uv_from_direction(normal),
        })
    }
}
