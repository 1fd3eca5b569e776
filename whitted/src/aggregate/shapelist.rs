use crate::{
    ray::Ray,
    shape::{Hit, Shape},
};

use super::Aggregate;

/// A flat list of shapes, scanned exhaustively.
///
/// Good enough for the handful of primitives this renderer deals with; the
/// far bound of the ray shrinks to the best hit found so far, so later
/// shapes only report strictly closer intersections.
#[derive(Default)]
pub struct ShapeList(pub Vec<Box<dyn Shape>>);

impl Aggregate for ShapeList {
    fn first_hit(&self, mut ray: Ray) -> Hit {
        let mut res = Hit::NoHit;

        for shape in self.0.iter() {
            if ray.range().is_empty() {
                break;
            }

            if let Hit::Hit(record) = shape.hit(&ray) {
                ray.bounds.1 = record.t;
                res = Hit::Hit(record);
            }
        }
        res
    }

    fn is_occluded(&self, ray: Ray) -> bool {
        self.0
            .iter()
            .any(|shape| matches!(shape.hit(&ray), Hit::Hit(_)))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::{shape::Sphere, texture::TextureId};

    fn sphere_at(y: f32, id: usize) -> Box<dyn Shape> {
        Box::new(Sphere {
            center: Vec3::new(0., y, 0.),
            radius: 1.,
            texture: TextureId(id),
        })
    }

    #[test]
    fn nearest_hit_is_order_independent() {
        let ray = || Ray::new(Vec3::ZERO, Vec3::Y);

        let front_to_back = ShapeList(vec![sphere_at(5., 0), sphere_at(10., 1), sphere_at(20., 2)]);
        let back_to_front = ShapeList(vec![sphere_at(20., 2), sphere_at(10., 1), sphere_at(5., 0)]);

        let a = front_to_back.first_hit(ray()).record().expect("hit");
        let b = back_to_front.first_hit(ray()).record().expect("hit");

        assert_eq!(a.texture, TextureId(0));
        assert_eq!(b.texture, TextureId(0));
        assert_eq!(a.t, b.t);
    }

    #[test]
    fn empty_list_misses() {
        let list = ShapeList(Vec::new());
        assert!(list.first_hit(Ray::new(Vec3::ZERO, Vec3::Y)).record().is_none());
        assert!(!list.is_occluded(Ray::new(Vec3::ZERO, Vec3::Y)));
    }

    #[test]
    fn occlusion_respects_the_far_bound() {
        let list = ShapeList(vec![sphere_at(10., 0)]);

        let reaches = Ray::new_with_range(Vec3::ZERO, Vec3::Y, 0.0..9.5);
        let stops_short = Ray::new_with_range(Vec3::ZERO, Vec3::Y, 0.0..8.0);

        assert!(list.is_occluded(reaches));
        assert!(!list.is_occluded(stops_short));
    }
}
