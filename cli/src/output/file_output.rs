use std::path::PathBuf;

use anyhow::Result;
use image::{buffer::ConvertBuffer, ImageBuffer, Luma, Rgb};
use whitted::color;

use crate::{cli::FinalOutput, tile_renderer::OutputBuffers};

type DepthBuffer = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Rescale world distances onto [0, 1] so the quantized depth PNG keeps its
/// contrast instead of saturating. Misses stay at zero.
fn normalize_depth(depth: &DepthBuffer) -> DepthBuffer {
    let max = depth.pixels().map(|pixel| pixel.0[0]).fold(0.0f32, f32::max);

    let mut out = depth.clone();
    if max > 0.0 {
        for pixel in out.pixels_mut() {
            pixel.0[0] /= max;
        }
    }
    out
}

/// Writes the frame to disk: unclamped EXR under `hdr/`, clamped and
/// quantized PNG under `ldr/`.
pub struct FileOutput {
    pub hdr_outdir: Option<PathBuf>,
    pub ldr_outdir: Option<PathBuf>,
}

impl FileOutput {
    pub fn new(outdir: PathBuf) -> Self {
        Self {
            hdr_outdir: Some(outdir.join("hdr")),
            ldr_outdir: Some(outdir.join("ldr")),
        }
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, output_buffers: &OutputBuffers) -> Result<()> {
        if let Some(ref hdr_outdir) = self.hdr_outdir {
            let hdr_path = hdr_outdir.as_path();
            std::fs::create_dir_all(hdr_path)?;

            log::info!("Saving HDR images...");
            output_buffers.color.save(hdr_path.join("color.exr"))?;

            let depth: ImageBuffer<Rgb<f32>, Vec<f32>> = output_buffers.depth.convert();
            depth.save(hdr_path.join("depth.exr"))?;
        }

        if let Some(ref ldr_outdir) = self.ldr_outdir {
            let ldr_path = ldr_outdir.as_path();
            std::fs::create_dir_all(ldr_path)?;

            log::info!("Saving LDR images...");
            let mut clamped = output_buffers.color.clone();
            for pixel in clamped.pixels_mut() {
                *pixel = color::clamp(*pixel);
            }
            let ldr_color: ImageBuffer<Rgb<u8>, Vec<u8>> = clamped.convert();
            ldr_color.save(ldr_path.join("color.png"))?;

            let ldr_depth: ImageBuffer<Rgb<u8>, Vec<u8>> =
                normalize_depth(&output_buffers.depth).convert();
            ldr_depth.save(ldr_path.join("depth.png"))?;
        }

        Ok(())
    }
}
