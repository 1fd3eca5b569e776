mod red_sphere;
mod spheres;

pub use red_sphere::RedSphereScene;
pub use spheres::SpheresScene;
