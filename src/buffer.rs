//! The pixel buffer a render fills in.
//!
//! Cells are stored row-major by *row*, the real-axis index, so every
//! row is one contiguous slice.  That lets the scheduler hand each
//! unit of work a disjoint `&mut` borrow of exactly the cells it owns.
//! Encoders want the usual image layout instead (x along a scanline,
//! y down the image, with x being our row), so `to_rgba_bytes`
//! transposes on the way out.

use std::slice::{ChunksMut, IterMut};

use config::ViewportConfig;
use palette::Color;
use planes::Pixel;

/// A `width × height` grid of colours, allocated before rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl PixelBuffer {
    /// Allocates a grid of unpainted (transparent) cells.  The size is
    /// not checked here; outside the crate buffers come from
    /// `for_config`, whose dimensions have been validated.
    pub(crate) fn new(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            cells: vec![Color::default(); width * height],
        }
    }

    /// Allocates a buffer sized for the given viewport.
    pub fn for_config(config: &ViewportConfig) -> PixelBuffer {
        PixelBuffer::new(config.width(), config.height())
    }

    /// The number of rows.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of cells in each row.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a buffer with no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The colour at a pixel, if the pixel lies inside the buffer.
    pub fn get(&self, pixel: Pixel) -> Option<Color> {
        if pixel.0 < self.width && pixel.1 < self.height {
            Some(self.cells[pixel.0 * self.height + pixel.1])
        } else {
            None
        }
    }

    /// Mutable access to a single cell, if the pixel lies inside the
    /// buffer.
    pub fn cell_mut(&mut self, pixel: Pixel) -> Option<&mut Color> {
        if pixel.0 < self.width && pixel.1 < self.height {
            Some(&mut self.cells[pixel.0 * self.height + pixel.1])
        } else {
            None
        }
    }

    /// One disjoint slice per row, in row order.
    pub fn rows_mut(&mut self) -> ChunksMut<Color> {
        // A zero height would make chunks_mut panic; the cells are empty anyway.
        self.cells.chunks_mut(self.height.max(1))
    }

    /// Every cell, in row order.
    pub fn cells_mut(&mut self) -> IterMut<Color> {
        self.cells.iter_mut()
    }

    /// The cells in storage order: rows, then the columns of each row.
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Flattens the buffer into RGBA8 bytes in image order: the row
    /// index becomes x, the column index becomes y, and bytes run
    /// along x first.  The result is `width * height * 4` bytes long.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.cells.len() * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                bytes.extend_from_slice(&self.cells[x * self.height + y].channels());
            }
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shade(v: u8) -> Color {
        Color {
            r: v,
            g: v,
            b: v,
            a: 255,
        }
    }

    #[test]
    fn new_buffers_are_unpainted() {
        let buffer = PixelBuffer::new(3, 2);
        assert_eq!(buffer.len(), 6);
        assert!(buffer.cells().iter().all(|c| *c == Color::default()));
    }

    #[test]
    fn rows_are_contiguous_and_disjoint() {
        let mut buffer = PixelBuffer::new(3, 2);
        for (row, cells) in buffer.rows_mut().enumerate() {
            assert_eq!(cells.len(), 2);
            for cell in cells.iter_mut() {
                *cell = shade(row as u8);
            }
        }
        assert_eq!(buffer.get(Pixel(0, 1)), Some(shade(0)));
        assert_eq!(buffer.get(Pixel(2, 0)), Some(shade(2)));
        assert_eq!(buffer.get(Pixel(3, 0)), None);
        assert_eq!(buffer.get(Pixel(0, 2)), None);
    }

    #[test]
    fn cells_outside_the_buffer_are_not_handed_out() {
        let mut buffer = PixelBuffer::new(4, 3);
        assert!(buffer.cell_mut(Pixel(4, 0)).is_none());
        assert!(buffer.cell_mut(Pixel(0, 3)).is_none());
        if let Some(cell) = buffer.cell_mut(Pixel(3, 2)) {
            *cell = shade(7);
        }
        assert_eq!(buffer.cells()[11], shade(7));
    }

    #[test]
    fn rgba_bytes_are_in_image_order() {
        let mut buffer = PixelBuffer::new(2, 3);
        *buffer.cell_mut(Pixel(1, 0)).unwrap() = shade(10);
        *buffer.cell_mut(Pixel(0, 2)).unwrap() = shade(20);
        let bytes = buffer.to_rgba_bytes();
        assert_eq!(bytes.len(), 2 * 3 * 4);
        // (x=1, y=0) is the second pixel of the first scanline.
        assert_eq!(&bytes[4..8], &[10, 10, 10, 255]);
        // (x=0, y=2) opens the third scanline.
        assert_eq!(&bytes[16..20], &[20, 20, 20, 255]);
    }
}
