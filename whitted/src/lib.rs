pub mod aggregate;
pub mod camera;
pub mod color;
pub mod integrators;
pub mod math;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod texture;
pub mod utils;
