use anyhow::Result;

use crate::{
    output::FileOutput,
    tile_renderer::{OutputBuffers, TileRenderer},
    Args,
};

/// An output that consumes the completed frame once rendering is done.
pub trait FinalOutput: Send {
    fn commit(&self, output_buffers: &OutputBuffers) -> Result<()>;
}

pub struct Cli {
    pub final_outputs: Vec<Box<dyn FinalOutput>>,
    pub tile_renderer: TileRenderer,
}

impl Cli {
    pub fn new(args: Args) -> Result<Self> {
        if args.no_threads {
            log::warn!("Working on only one thread");
            rayon::ThreadPoolBuilder::new()
                .num_threads(1)
                .build_global()?;
        }

        Ok(Self {
            final_outputs: vec![Box::new(FileOutput::new(args.outdir))],
            tile_renderer: TileRenderer {
                width: args.dimensions.width,
                height: args.dimensions.height,
                vfov: args.fov.to_radians(),
                tile_size: 32,
                scene: args.scene.into(),
            },
        })
    }

    pub fn run(self) -> Result<()> {
        let output_buffers = self.tile_renderer.run()?;

        for final_output in self.final_outputs {
            final_output.commit(&output_buffers)?;
        }

        log::info!("Done");
        Ok(())
    }
}
