mod cli;
mod output;
pub mod progress;
mod tile_renderer;

use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cli::Cli;
use whitted::scene::{
    examples::{RedSphereScene, SpheresScene},
    Scene,
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    RedSphere,
    #[default]
    Spheres,
}

impl From<AvailableScene> for Scene {
    fn from(value: AvailableScene) -> Self {
        match value {
            AvailableScene::RedSphere => RedSphereScene.into(),
            AvailableScene::Spheres => SpheresScene.into(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split('x');
        let (Some(a), Some(b)) = (split_it.next(), split_it.next()) else {
            return Err(anyhow::anyhow!("Incorrect format, see help"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;
        if width < 2 || height < 2 {
            return Err(anyhow::anyhow!("Dimensions must be at least 2x2"));
        }

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "800x600")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, default_value_t = 90.0)]
    /// Vertical field of view, in degrees
    fov: f32,

    #[arg(short, long, default_value = "output/")]
    /// Directory the rendered images are written into
    outdir: PathBuf,

    #[arg(long)]
    /// Render on a single thread
    no_threads: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    Cli::new(args)?.run()
}
