use glam::Vec3;
use image::Rgb;

use crate::{
    color,
    scene::Scene,
    shape::Sphere,
    texture::{TextureDescriptor, Uniform},
};

/// A single unlit red sphere straight ahead, shaded by ambient light only.
pub struct RedSphereScene;

impl From<RedSphereScene> for Scene {
    fn from(_: RedSphereScene) -> Self {
        let mut scene = Scene {
            ambient: Rgb([0.1, 0.1, 0.1]),
            ..Scene::default()
        };

        let red = scene.insert_texture(TextureDescriptor {
            label: Some("Red".to_string()),
            texture: Box::new(Uniform(color::RED)),
        });

        scene.insert_object(Sphere {
            center: Vec3::new(0., 10., 0.),
            radius: 1.,
            texture: red,
        });

        scene
    }
}
