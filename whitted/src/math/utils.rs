use std::f32::consts::{PI, TAU};

use crate::texture::Uv;

use super::vec::Vec3;

/// Spherical projection of a unit direction onto `[0,1]²`.
///
/// Longitude is measured in the xy plane (`atan2(x, y)`), colatitude from the
/// +z pole, so `v = 0` at the top of the sphere and `v = 1` at the bottom.
pub fn sphere_uv_from_direction(direction: Vec3) -> Uv {
    let theta = f32::atan2(direction.x, direction.y);
    let phi = f32::acos(direction.z.clamp(-1.0, 1.0));

    [(theta + PI) / TAU, phi / PI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poles_map_to_v_extremes() {
        let [_, v_top] = sphere_uv_from_direction(Vec3::Z);
        let [_, v_bottom] = sphere_uv_from_direction(Vec3::NEG_Z);
        assert!(v_top.abs() < 1e-6);
        assert!((v_bottom - 1.0).abs() < 1e-6);
    }

    #[test]
    fn uv_stays_in_unit_square() {
        let directions = [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::new(1.0, 1.0, 1.0).normalize(),
            Vec3::new(-0.3, 0.8, -0.6).normalize(),
        ];
        for direction in directions {
            let [u, v] = sphere_uv_from_direction(direction);
            assert!((0.0..=1.0).contains(&u), "u out of range for {direction}");
            assert!((0.0..=1.0).contains(&v), "v out of range for {direction}");
        }
    }

    #[test]
    fn equator_forward_is_mid_height() {
        let [_, v] = sphere_uv_from_direction(Vec3::Y);
        assert!((v - 0.5).abs() < 1e-6);
    }
}
