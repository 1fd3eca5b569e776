use crate::{
    ray::Ray,
    renderer::{RayResult, Renderer},
};

mod whitted;

/// Turns a primary ray into a shaded color against the renderer's scene.
pub trait Integrator: Send + Sync {
    fn ray_cast(&self, renderer: &Renderer, ray: Ray) -> RayResult;
}

pub use whitted::WhittedIntegrator;
