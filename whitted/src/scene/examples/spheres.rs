use glam::Vec3;
use image::Rgb;

use crate::{
    scene::{PointLight, Scene},
    shape::Sphere,
    texture::{Checker, TextureDescriptor, Uniform},
};

/// Two lit spheres resting over a huge checkered ground sphere.
pub struct SpheresScene;

impl From<SpheresScene> for Scene {
    fn from(_: SpheresScene) -> Self {
        let mut scene = Scene {
            ambient: Rgb([0.05, 0.05, 0.05]),
            background: Rgb([0.02, 0.02, 0.05]),
            ..Scene::default()
        };

        let ground = scene.insert_texture(TextureDescriptor {
            label: Some("Ground checker".to_string()),
            texture: Box::new(Checker {
                odd: Box::new(Uniform(Rgb([0.2, 0.2, 0.2]))),
                even: Box::new(Uniform(Rgb([0.8, 0.8, 0.8]))),
            }),
        });
        let teal = scene.insert_texture(TextureDescriptor {
            label: Some("Teal".to_string()),
            texture: Box::new(Uniform(Rgb([0.2, 0.9, 0.7]))),
        });
        let blue = scene.insert_texture(TextureDescriptor {
            label: Some("Blue".to_string()),
            texture: Box::new(Uniform(Rgb([0.2, 0.3, 0.7]))),
        });

        scene.insert_object(Sphere {
            center: Vec3::new(0., 15., -102.),
            radius: 100.,
            texture: ground,
        });
        scene.insert_object(Sphere {
            center: Vec3::new(-1.5, 12., -1.),
            radius: 1.,
            texture: teal,
        });
        scene.insert_object(Sphere {
            center: Vec3::new(1.5, 14., -0.5),
            radius: 1.5,
            texture: blue,
        });

        scene.insert_light(PointLight {
            position: Vec3::new(5., 5., 5.),
            color: Rgb([0.8, 0.8, 0.8]),
        });
        scene.insert_light(PointLight {
            position: Vec3::new(-4., 8., 3.),
            color: Rgb([0.3, 0.25, 0.2]),
        });

        scene
    }
}
