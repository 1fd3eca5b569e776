use crate::{math::vec::Vec3, ray::Ray};

/// Integer pixel position, image convention: left to right, top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

/// Normalized device coordinates in `[0,1]²`.
#[derive(Debug, Clone, Copy)]
pub struct ViewportCoord {
    pub vx: f32,
    pub vy: f32,
}

impl ViewportCoord {
    pub fn from_pixel_coord(camera: &Camera, coords: PixelCoord) -> Self {
        // Clamping the divisor keeps a single-pixel axis at 0/1 instead of
        // producing a 0/0 coordinate.
        Self {
            vx: coords.x as f32 / (camera.width.max(2) - 1) as f32,
            vy: coords.y as f32 / (camera.height.max(2) - 1) as f32,
        }
    }
}

/// A pinhole camera fixed at the world origin, looking down +Y.
///
/// The image plane sits one unit ahead; the per-axis field-of-view tangents
/// scale normalized device coordinates onto it. +vx maps to +X, +vy runs down
/// the image so it maps to -Z.
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub tan_fov_x: f32,
    pub tan_fov_y: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32, vfov: f32) -> Self {
        let tan_fov_y = f32::tan(vfov / 2.);
        let aspect_ratio = width as f32 / height as f32;

        Self {
            width,
            height,
            tan_fov_x: tan_fov_y * aspect_ratio,
            tan_fov_y,
        }
    }

    pub fn ray(&self, vx: f32, vy: f32) -> Ray {
        // The constant forward component keeps the direction nonzero for any
        // viewport coordinate.
        let direction = Vec3::new(
            self.tan_fov_x * (2. * vx - 1.),
            1.,
            -self.tan_fov_y * (2. * vy - 1.),
        );
        Ray::new(Vec3::ZERO, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pixel_looks_straight_ahead() {
        let camera = Camera::new(64, 64, f32::to_radians(90.));
        let ray = camera.ray(0.5, 0.5);

        assert!(ray.direction.distance(Vec3::Y) < 1e-6);
        assert_eq!(ray.origin, Vec3::ZERO);
    }

    #[test]
    fn corners_bend_by_the_fov_tangents() {
        let camera = Camera::new(64, 64, f32::to_radians(90.));

        let top_left = camera.ray(0., 0.);
        assert!(top_left.direction.x < 0.);
        assert!(top_left.direction.z > 0.);

        let bottom_right = camera.ray(1., 1.);
        assert!(bottom_right.direction.x > 0.);
        assert!(bottom_right.direction.z < 0.);
    }

    #[test]
    fn single_pixel_axis_stays_finite() {
        let camera = Camera::new(1, 1, f32::to_radians(90.));

        let coord = ViewportCoord::from_pixel_coord(&camera, PixelCoord { x: 0, y: 0 });
        assert!(coord.vx.is_finite());
        assert!(coord.vy.is_finite());

        let ray = camera.ray(coord.vx, coord.vy);
        assert!(ray.direction.is_finite());
        assert!(ray.direction.is_normalized());
    }

    #[test]
    fn pixel_to_viewport_covers_the_unit_square() {
        let camera = Camera::new(100, 50, f32::to_radians(60.));

        let first = ViewportCoord::from_pixel_coord(&camera, PixelCoord { x: 0, y: 0 });
        assert_eq!((first.vx, first.vy), (0., 0.));

        let last = ViewportCoord::from_pixel_coord(&camera, PixelCoord { x: 99, y: 49 });
        assert_eq!((last.vx, last.vy), (1., 1.));
    }
}
