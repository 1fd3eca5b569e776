use crate::color::Color;

pub type Uv = [f32; 2];

/// Surface appearance queried by UV coordinate.
///
/// A flat-colored surface and an image- or procedurally-textured one differ
/// only in whether they look at the coordinate.
pub trait Texture: Sync + Send {
    fn color(&self, uv: Uv) -> Color;
}

pub struct Uniform(pub Color);

impl Texture for Uniform {
    fn color(&self, _: Uv) -> Color {
        self.0
    }
}

pub struct Checker {
    pub odd: Box<dyn Texture>,
    pub even: Box<dyn Texture>,
}

impl Texture for Checker {
    fn color(&self, uv: Uv) -> Color {
        let fu = 10.;
        let fv = 10.;
        let wu = std::f32::consts::TAU * fu;
        let wv = std::f32::consts::TAU * fv;
        let even = f32::cos(wu * uv[0]) * f32::cos(wv * uv[1]) > 0.0;
        let uv = [uv[0] / fu, uv[1] / fv];
        if even {
            self.even.color(uv)
        } else {
            self.odd.color(uv)
        }
    }
}

/// A texture stored in the scene pool, optionally labelled for debugging.
pub struct TextureDescriptor {
    pub label: Option<String>,
    pub texture: Box<dyn Texture>,
}

impl std::fmt::Debug for TextureDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureDescriptor")
            .field("label", &self.label)
            .field("texture", &"<texture>")
            .finish()
    }
}

/// Index into the scene's texture pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureId(pub usize);
