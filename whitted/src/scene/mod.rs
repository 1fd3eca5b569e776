use crate::{
    aggregate::ShapeList,
    color::{self, Color},
    math::vec::Vec3,
    shape::Shape,
    texture::{TextureDescriptor, TextureId},
};

pub mod examples;

/// A point emitter; the color doubles as intensity and there is no falloff
/// with distance.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
}

/// Static description of what gets rendered.
///
/// Assembled once before rendering and never mutated afterwards, so it can be
/// read from every worker without locking.
pub struct Scene {
    pub objects: ShapeList,
    pub lights: Vec<PointLight>,
    pub textures: Vec<TextureDescriptor>,
    pub ambient: Color,
    pub background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: ShapeList::default(),
            lights: Vec::new(),
            textures: Vec::new(),
            ambient: color::BLACK,
            background: color::BLACK,
        }
    }
}

impl Scene {
    /// Insert an object in the scene
    pub fn insert_object<T: Shape + 'static>(&mut self, object: T) {
        self.objects.0.push(Box::new(object))
    }

    /// Insert a texture and return the id to reference it from shapes
    pub fn insert_texture(&mut self, texture: TextureDescriptor) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() - 1)
    }

    pub fn insert_light(&mut self, light: PointLight) {
        self.lights.push(light)
    }
}
