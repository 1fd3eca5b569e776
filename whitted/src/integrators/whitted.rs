use crate::{
    aggregate::Aggregate,
    color::{mix, MixMode},
    math::vec::{RgbAsVec3Ext, Vec3AsNonZero, Vec3AsRgbExt},
    ray::Ray,
    renderer::{RayResult, Renderer},
    shape::Hit,
};

use super::Integrator;

/// Offset along the surface normal applied to the shading point so shadow
/// rays do not re-intersect the surface they started on.
const SHADOW_BIAS: f32 = 1e-4;

/// Ambient plus shadow-tested Lambertian diffuse. No recursion: this renderer
/// stops at the first surface.
pub struct WhittedIntegrator;

impl Integrator for WhittedIntegrator {
    fn ray_cast(&self, renderer: &Renderer, ray: Ray) -> RayResult {
        let Hit::Hit(record) = renderer.objects.first_hit(ray) else {
            return RayResult {
                color: renderer.background,
                z: 0.0,
            };
        };

        let surface = renderer.textures[record.texture.0].texture.color(record.uv);
        let point = record.hit_point + SHADOW_BIAS * record.normal;

        let mut sum = mix(MixMode::Mul, renderer.ambient, surface);
        for light in renderer.lights.iter() {
            // A light sitting on the shading point has no usable direction.
            let Some(to_light) = (light.position - point).as_non_zero(1e-6) else {
                continue;
            };
            let light_distance = to_light.length();

            // Bounded by the light distance: an intersection beyond the
            // light does not occlude it.
            let shadow_ray = Ray::new_with_range(point, to_light, 0.0..light_distance);
            if renderer.objects.is_occluded(shadow_ray) {
                continue;
            }

            let factor = f32::max(0.0, record.normal.dot(to_light / light_distance));
            sum = (sum.vec() + light.color.vec() * surface.vec() * factor).rgb();
        }

        RayResult {
            color: sum,
            z: record.t,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use image::Rgb;

    use super::*;
    use crate::{
        camera::PixelCoord,
        color,
        renderer::{DefaultRenderer, Renderer},
        scene::{examples::RedSphereScene, PointLight, Scene},
        shape::Sphere,
        texture::{TextureDescriptor, Uniform},
    };

    fn renderer_for(scene: Scene) -> Renderer {
        DefaultRenderer {
            width: 64,
            height: 64,
            vfov: f32::to_radians(90.),
            scene,
            integrator: Box::new(WhittedIntegrator),
        }
        .into()
    }

    fn red_scene_with_light(light: Option<PointLight>, occluder: bool) -> Scene {
        let mut scene: Scene = RedSphereScene.into();
        if let Some(light) = light {
            scene.insert_light(light);
        }
        if occluder {
            let gray = scene.insert_texture(TextureDescriptor {
                label: None,
                texture: Box::new(Uniform(Rgb([0.5, 0.5, 0.5]))),
            });
            // Midpoint of the segment from the sphere's front point
            // (0, 9, 0) to the off-axis light at (0, 4, 3); clear of the
            // camera axis.
            scene.insert_object(Sphere {
                center: Vec3::new(0., 6.5, 1.5),
                radius: 0.5,
                texture: gray,
            });
        }
        scene
    }

    fn shade_center(renderer: &Renderer) -> Rgb<f32> {
        let ray = renderer.camera.ray(0.5, 0.5);
        renderer.integrator.ray_cast(renderer, ray).color
    }

    #[test]
    fn unlit_sphere_is_ambient_times_surface() {
        let renderer = renderer_for(red_scene_with_light(None, false));
        let color = shade_center(&renderer);

        assert!((color.0[0] - 0.1).abs() < 1e-6);
        assert_eq!(color.0[1], 0.0);
        assert_eq!(color.0[2], 0.0);
    }

    #[test]
    fn miss_returns_background() {
        let renderer = renderer_for(red_scene_with_light(None, false));
        let ray = renderer.camera.ray(0.0, 0.0);

        let result = renderer.integrator.ray_cast(&renderer, ray);
        assert_eq!(result.color, color::BLACK);
        assert_eq!(result.z, 0.0);
    }

    #[test]
    fn head_on_light_adds_full_diffuse() {
        let light = PointLight {
            position: Vec3::new(0., 5., 0.),
            color: color::WHITE,
        };
        let renderer = renderer_for(red_scene_with_light(Some(light), false));
        let color = shade_center(&renderer);

        // Normal and light direction are aligned: ambient + light * surface * 1.
        assert!((color.0[0] - 1.1).abs() < 1e-3);
        assert!(color.0[1].abs() < 1e-6);
        assert!(color.0[2].abs() < 1e-6);
    }

    #[test]
    fn occluder_removes_the_diffuse_term() {
        let light = PointLight {
            position: Vec3::new(0., 4., 3.),
            color: color::WHITE,
        };

        let lit = renderer_for(red_scene_with_light(Some(light), false));
        let shadowed = renderer_for(red_scene_with_light(Some(light), true));

        let lit_color = shade_center(&lit);
        let shadowed_color = shade_center(&shadowed);

        // Lit: ambient plus a non-grazing diffuse term. Shadowed: ambient
        // only. Removing the occluder is the lit scene again.
        assert!(lit_color.0[0] > 0.5);
        assert!((shadowed_color.0[0] - 0.1).abs() < 1e-3);
        assert!(lit_color.0[0] > shadowed_color.0[0]);
    }

    #[test]
    fn pixel_interface_matches_direct_ray_cast() {
        let renderer = renderer_for(red_scene_with_light(None, false));
        // Odd dimensions put a pixel exactly at the viewport center.
        let renderer = Renderer {
            camera: crate::camera::Camera::new(65, 65, f32::to_radians(90.)),
            ..renderer
        };

        let result = renderer.process_pixel(PixelCoord { x: 32, y: 32 });
        assert!((result.color[0] - 0.1).abs() < 1e-6);
        assert!((result.z - 9.0).abs() < 1e-3);
    }
}
