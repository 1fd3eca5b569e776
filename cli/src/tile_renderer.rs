use std::sync::mpsc::{channel, Receiver};

use anyhow::Result;
use bytemuck::Zeroable;
use image::{ImageBuffer, Luma, Rgb, Rgb32FImage};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::thread_rng;
use rayon::prelude::{ParallelBridge, ParallelIterator};

use whitted::camera::PixelCoord;
use whitted::integrators::WhittedIntegrator;
use whitted::renderer::{DefaultRenderer, RenderResult, Renderer};
use whitted::scene::Scene;

use crate::progress::Progress;

pub struct TileMsg {
    pub tile_x: u32,
    pub tile_y: u32,
    pub data: Vec<RenderResult>,
}

/// Renders the frame tile by tile on the rayon pool. One writer thread owns
/// the output buffers; workers hand finished tiles over a channel, so no two
/// threads ever touch the same pixels.
pub struct TileRenderer {
    pub width: u32,
    pub height: u32,
    pub vfov: f32,
    pub tile_size: u32,
    pub scene: Scene,
}

pub struct OutputBuffers {
    pub color: Rgb32FImage,
    pub depth: ImageBuffer<Luma<f32>, Vec<f32>>,
}

impl TileRenderer {
    pub fn run(self) -> Result<OutputBuffers> {
        let width = self.width;
        let height = self.height;
        let tile_size = self.tile_size;

        let mut output_buffers = OutputBuffers {
            color: ImageBuffer::new(width, height),
            depth: ImageBuffer::new(width, height),
        };

        let mut push_tile_on_output_buffers = |msg: TileMsg| {
            let x0 = msg.tile_x * tile_size;
            let y0 = msg.tile_y * tile_size;
            let tile_width = (x0 + tile_size).min(width) - x0;
            let tile_height = (y0 + tile_size).min(height) - y0;

            for j in 0..tile_height {
                for i in 0..tile_width {
                    let RenderResult { color, z } = msg.data[(j * tile_width + i) as usize];
                    *output_buffers.color.get_pixel_mut(x0 + i, y0 + j) = Rgb(color);
                    *output_buffers.depth.get_pixel_mut(x0 + i, y0 + j) = Luma([z]);
                }
            }
        };

        let tile_count_x = (width as f32 / tile_size as f32).ceil() as u32;
        let tile_count_y = (height as f32 / tile_size as f32).ceil() as u32;

        let progress = Progress::new((tile_count_x * tile_count_y) as usize);
        let mut generation_result = Ok(());

        enum Message {
            Tile(TileMsg),
            Stop,
        }

        rayon::scope(|s| {
            let renderer: Renderer = DefaultRenderer {
                width,
                height,
                vfov: self.vfov,
                scene: self.scene,
                integrator: Box::new(WhittedIntegrator),
            }
            .into();
            let renderer = &renderer;
            let (tx, rx) = channel();

            log::info!("Generating image...");
            s.spawn(|_| {
                let mut push_tile_on_output_buffers = push_tile_on_output_buffers;
                let rx: Receiver<Message> = rx; // Force move without moving anything else
                for msg in rx.iter() {
                    match msg {
                        Message::Tile(tile_msg) => {
                            push_tile_on_output_buffers(tile_msg);
                            progress.print();
                        }
                        Message::Stop => {
                            break;
                        }
                    }
                }
                progress.print();
            });

            // Shuffled so finished tiles pop up all over the frame instead
            // of sweeping in raster order.
            let mut tiles = (0..tile_count_x)
                .cartesian_product(0..tile_count_y)
                .collect::<Vec<_>>();
            tiles.shuffle(&mut thread_rng());

            // Note that this will stop whenever the receiver is closed
            generation_result = tiles
                .into_iter()
                .par_bridge()
                .try_for_each_with(tx.clone(), |tx, (tile_x, tile_y)| -> Result<()> {
                    let x_range = (tile_x * tile_size)..((tile_x + 1) * tile_size).min(width);
                    let y_range = (tile_y * tile_size)..((tile_y + 1) * tile_size).min(height);
                    let tile_width = x_range.len();

                    let mut data = Vec::new();
                    data.resize(tile_width * y_range.len(), RenderResult::zeroed());

                    for (j, y) in y_range.enumerate() {
                        for (i, x) in x_range.clone().enumerate() {
                            data[j * tile_width + i] = renderer.process_pixel(PixelCoord { x, y });
                        }
                    }

                    log::debug!("Tile {tile_x} {tile_y} done");
                    tx.send(Message::Tile(TileMsg {
                        tile_x,
                        tile_y,
                        data,
                    }))?;
                    progress.inc();
                    Ok(())
                });

            tx.send(Message::Stop).unwrap();
        });

        match generation_result {
            Ok(_) => log::info!("Image fully generated"),
            Err(err) => log::info!("Image generation interrupted: {}", err),
        };

        Ok(output_buffers)
    }
}
