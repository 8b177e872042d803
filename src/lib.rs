#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the orbit `z = z * z + c`, started at zero, stays
//! bounded.  Every pixel of the image is mapped to one such point,
//! and we count how many steps its orbit takes to travel two units
//! away from the origin.  That count, the "velocity" of the point, is
//! turned into a hue; points that never escape within the iteration
//! cap are painted black.
//!
//! Rendering is embarrassingly parallel: each pixel depends only on
//! its own coordinates.  The renderer offers three interchangeable
//! schedules (a single thread, one unit of work per pixel, and one
//! unit of work per row) which always produce the same image.
//!
//! ```no_run
//! use mandelbrot::{render, Strategy, ViewportConfig};
//!
//! let config =
//!     ViewportConfig::new(800, 600, (-2.0, 1.0), (-1.5, 1.5), 100, Strategy::PerRow).unwrap();
//! let buffer = render(&config).unwrap();
//! assert_eq!(buffer.len(), 800 * 600);
//! ```

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod buffer;
pub mod config;
pub mod errors;
pub mod escape;
pub mod palette;
pub mod planes;
pub mod render;

pub use buffer::PixelBuffer;
pub use config::{Strategy, ViewportConfig};
pub use errors::{ConfigError, RenderError};
pub use escape::escape_time;
pub use palette::{color_for, Color, Hsl};
pub use planes::{Pixel, PlaneMapper};
pub use render::{render, Renderer};
