// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Filling the pixel buffer.
//!
//! Painting one pixel is a pure function of its coordinates: map it
//! onto the complex plane, count how long its orbit takes to escape,
//! and turn that count into a colour.  The only side effect is the
//! write into the pixel's own cell.  Because no unit of work ever
//! reads the buffer, and every cell belongs to exactly one unit, the
//! concurrent strategies need no locking around the buffer at all;
//! the borrow checker hands each unit its own `&mut` cells.
//!
//! All three strategies produce identical buffers.

extern crate crossbeam;

use itertools::iproduct;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use buffer::PixelBuffer;
use config::{Strategy, ViewportConfig};
use errors::RenderError;
use escape::escape_time;
use palette::{color_for, Color};
use planes::{Pixel, PlaneMapper};

type PixelUnits<'a> = Box<dyn Iterator<Item = (Pixel, &'a mut Color)> + Send + 'a>;

/// Holds a validated viewport and the plane mapping derived from it.
/// Once built it is never mutated, and is shared by reference with
/// every worker.
#[derive(Debug)]
pub struct Renderer {
    config: ViewportConfig,
    plane: PlaneMapper,
}

impl Renderer {
    /// Builds a renderer for a validated configuration.
    pub fn new(config: ViewportConfig) -> Renderer {
        let plane = PlaneMapper::new(&config);
        Renderer { config, plane }
    }

    /// The configuration this renderer was built from.
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// The colour of a single pixel.
    pub fn paint(&self, pixel: &Pixel) -> Color {
        let point = self.plane.pixel_to_point(pixel);
        let iterations = escape_time(point, self.config.max_iterations());
        color_for(iterations, self.config.max_iterations())
    }

    fn paint_row(&self, row: usize, cells: &mut [Color]) {
        for (column, cell) in cells.iter_mut().enumerate() {
            *cell = self.paint(&Pixel(row, column));
        }
    }

    /// Fills the buffer using the configured strategy.  Returns only
    /// once every cell has been written.
    pub fn render(&self, buffer: &mut PixelBuffer) -> Result<(), RenderError> {
        self.render_with(self.config.strategy(), buffer)
    }

    /// Fills the buffer using an explicit strategy, ignoring the one
    /// in the configuration.
    pub fn render_with(
        &self,
        strategy: Strategy,
        buffer: &mut PixelBuffer,
    ) -> Result<(), RenderError> {
        if buffer.width() != self.config.width() || buffer.height() != self.config.height() {
            return Err(RenderError::BufferMismatch(
                self.config.width(),
                self.config.height(),
                buffer.width(),
                buffer.height(),
            ));
        }

        debug!(
            "Rendering {}x{} pixels, {} iterations, mode {}",
            self.config.width(),
            self.config.height(),
            self.config.max_iterations(),
            strategy
        );
        let started = Instant::now();
        match strategy {
            Strategy::Sequential => self.render_sequential(buffer),
            Strategy::PerPixel => self.render_per_pixel(buffer)?,
            Strategy::PerRow => self.render_per_row(buffer)?,
        }
        info!("Rendered with mode {} in {:?}", strategy, started.elapsed());
        Ok(())
    }

    /// The main function for single-threaded rendering.
    fn render_sequential(&self, buffer: &mut PixelBuffer) {
        for (row, cells) in buffer.rows_mut().enumerate() {
            self.paint_row(row, cells);
        }
    }

    /// Every pixel is its own unit of work.  Spawning a thread per
    /// pixel is not practical for real images, so the units are
    /// queued and drained by a fixed pool of workers; each worker pulls
    /// one pixel and its cell at a time.
    fn render_per_pixel(&self, buffer: &mut PixelBuffer) -> Result<(), RenderError> {
        let units: PixelUnits = Box::new(
            iproduct!(0..buffer.width(), 0..buffer.height())
                .map(|(row, column)| Pixel(row, column))
                .zip(buffer.cells_mut()),
        );
        let cells = Arc::new(Mutex::new(units));

        crossbeam::scope(|spawner| -> Result<(), RenderError> {
            for worker in 0..self.config.threads() {
                let cells = cells.clone();
                spawner
                    .builder()
                    .name(format!("pixel-worker-{}", worker))
                    .spawn(move |_| loop {
                        let unit = { cells.lock().ok().and_then(|mut queue| queue.next()) };
                        match unit {
                            Some((pixel, cell)) => {
                                *cell = self.paint(&pixel);
                            }
                            None => {
                                break;
                            }
                        }
                    })?;
            }
            Ok(())
        })
        .map_err(|_| RenderError::WorkerPanicked)?
    }

    /// Every row is its own unit of work, each on its own scoped
    /// thread, painting its cells in column order.  If the system runs
    /// out of threads partway through, the rows already started are
    /// joined and the failure is returned.
    fn render_per_row(&self, buffer: &mut PixelBuffer) -> Result<(), RenderError> {
        crossbeam::scope(|spawner| -> Result<(), RenderError> {
            for (row, cells) in buffer.rows_mut().enumerate() {
                spawner
                    .builder()
                    .name(format!("row-{}", row))
                    .spawn(move |_| {
                        trace!("Painting row {}", row);
                        self.paint_row(row, cells)
                    })?;
            }
            Ok(())
        })
        .map_err(|_| RenderError::WorkerPanicked)?
    }
}

/// Allocates a buffer for the configuration and fills it.
pub fn render(config: &ViewportConfig) -> Result<PixelBuffer, RenderError> {
    let mut buffer = PixelBuffer::for_config(config);
    Renderer::new(config.clone()).render(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: usize, height: usize, max_iterations: usize) -> ViewportConfig {
        ViewportConfig::new(
            width,
            height,
            (-2.0, 1.0),
            (-1.5, 1.5),
            max_iterations,
            Strategy::Sequential,
        )
        .unwrap()
    }

    #[test]
    fn sequential_paints_every_cell() {
        let buffer = render(&config(17, 9, 50)).unwrap();
        assert!(buffer.cells().iter().all(|c| c.a == 255));
    }

    #[test]
    fn strategies_agree_on_an_odd_shaped_image() {
        let cfg = config(31, 7, 64).with_threads(3).unwrap();
        let renderer = Renderer::new(cfg.clone());
        let mut expected = PixelBuffer::for_config(&cfg);
        renderer.render_with(Strategy::Sequential, &mut expected).unwrap();

        for strategy in &[Strategy::PerPixel, Strategy::PerRow] {
            let mut buffer = PixelBuffer::for_config(&cfg);
            renderer.render_with(*strategy, &mut buffer).unwrap();
            assert_eq!(buffer, expected, "mode {} disagrees", strategy);
        }
    }

    #[test]
    fn per_pixel_with_a_single_worker() {
        let cfg = config(5, 5, 20).with_threads(1).unwrap();
        let renderer = Renderer::new(cfg.clone());
        let mut single = PixelBuffer::for_config(&cfg);
        renderer.render_with(Strategy::PerPixel, &mut single).unwrap();
        assert_eq!(single, render(&cfg).unwrap());
    }

    #[test]
    fn more_workers_than_pixels() {
        let cfg = config(1, 2, 20)
            .with_threads(16)
            .unwrap()
            .with_strategy(Strategy::PerPixel);
        let buffer = render(&cfg).unwrap();
        assert!(buffer.cells().iter().all(|c| c.a == 255));
    }

    #[test]
    fn paint_matches_the_pure_pipeline() {
        let renderer = Renderer::new(config(3, 4, 30));
        // Pixel (2, 2) lands on the origin's real axis at 0.0 + 0.0i.
        assert_eq!(renderer.paint(&Pixel(2, 2)), color_for(30, 30));
    }

    #[test]
    fn mismatched_buffers_are_refused() {
        let renderer = Renderer::new(config(4, 4, 10));
        let mut buffer = PixelBuffer::new(4, 5);
        assert_eq!(
            renderer.render(&mut buffer),
            Err(RenderError::BufferMismatch(4, 4, 4, 5))
        );
        assert!(buffer.cells().iter().all(|c| *c == Color::default()));
    }
}
