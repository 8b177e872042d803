//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane bounded by the viewport's
//! minimum and maximum corners.
//!
//! The row of a pixel selects the real component and the column
//! selects the imaginary component.  That is the reverse of the
//! usual screen convention, but reference images were produced that
//! way and we keep it.
use num::Complex;

use config::ViewportConfig;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// The row and column of a pixel.  Row runs along the real axis,
/// column along the imaginary one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels on the integral plane onto points on the complex plane.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The far corner of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The minimum corner of the complex plane, where pixel 0,0 lands.
    pub origin: Complex<f64>,
    // The extent of the complex plane along each axis.
    spans: (f64, f64),
}

impl PlaneMapper {
    /// Takes the dimensions of the integral plane and the bounds of
    /// the complex plane from the configuration.  Validation has already happened by the
    /// time a `ViewportConfig` exists, so this cannot fail.
    pub fn new(config: &ViewportConfig) -> PlaneMapper {
        let (x_min, x_max) = config.x_bounds();
        let (y_min, y_max) = config.y_bounds();
        PlaneMapper {
            integral_plane: IntegralPlane(config.width(), config.height()),
            origin: Complex::new(x_min, y_min),
            spans: (x_max - x_min, y_max - y_min),
        }
    }

    /// Given a pixel on the integral cartesian plane, map it by linear
    /// interpolation onto the complex plane.  The multiplication
    /// happens before the division; reordering changes the last bit
    /// of some results.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.origin.re + ((pixel.0 as f64) * self.spans.0) / (self.integral_plane.0 as f64),
            self.origin.im + ((pixel.1 as f64) * self.spans.1) / (self.integral_plane.1 as f64),
        )
    }
}
