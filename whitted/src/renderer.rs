use bytemuck::{Pod, Zeroable};

use crate::{
    aggregate::ShapeList,
    camera::{Camera, PixelCoord, ViewportCoord},
    color::Color,
    integrators::Integrator,
    scene::{PointLight, Scene},
    texture::TextureDescriptor,
};

/// What an integrator reports back for one ray.
pub struct RayResult {
    pub color: Color,
    /// Distance to the hit, 0.0 on a miss.
    pub z: f32,
}

/// Per-pixel output in plain-old-data form, so tile buffers can be allocated
/// zeroed and sent across threads untouched.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct RenderResult {
    pub color: [f32; 3],
    pub z: f32,
}

/// Read-only bundle of everything a pixel needs: camera, scene data and the
/// integrator. Shared by all workers during a render.
pub struct Renderer {
    pub camera: Camera,
    pub objects: ShapeList,
    pub lights: Vec<PointLight>,
    pub textures: Vec<TextureDescriptor>,
    pub ambient: Color,
    pub background: Color,
    pub integrator: Box<dyn Integrator>,
}

impl Renderer {
    pub fn process_pixel(&self, coords: PixelCoord) -> RenderResult {
        let ViewportCoord { vx, vy } = ViewportCoord::from_pixel_coord(&self.camera, coords);
        let ray = self.camera.ray(vx, vy);
        let result = self.integrator.ray_cast(self, ray);

        RenderResult {
            color: result.color.0,
            z: result.z,
        }
    }
}

pub struct DefaultRenderer {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view, radians.
    pub vfov: f32,
    pub scene: Scene,
    pub integrator: Box<dyn Integrator>,
}

impl From<DefaultRenderer> for Renderer {
    fn from(value: DefaultRenderer) -> Self {
        Renderer {
            camera: Camera::new(value.width, value.height, value.vfov),
            objects: value.scene.objects,
            lights: value.scene.lights,
            textures: value.scene.textures,
            ambient: value.scene.ambient,
            background: value.scene.background,
            integrator: value.integrator,
        }
    }
}
