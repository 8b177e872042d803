//! The escape-time iteration.

use num::Complex;

/// The radius beyond which an orbit is known to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;

#[inline]
fn modulus(z: Complex<f64>) -> f64 {
    (z.re * z.re + z.im * z.im).sqrt()
}

/// This is our classic iterator function.  Starting from zero, it
/// applies `z = z * z + c` until either the orbit reaches the escape
/// radius or `max_iterations` steps have been taken, and returns the
/// number of steps taken.  The radius is tested against the current
/// value of `z` before each step, so a point that escapes on its
/// first step reports 1, and a point that never escapes reports
/// `max_iterations`.
pub fn escape_time(c: Complex<f64>, max_iterations: usize) -> usize {
    let mut z = Complex::new(0.0_f64, 0.0_f64);
    let mut iterations = 0;
    while iterations < max_iterations && modulus(z) < ESCAPE_RADIUS {
        z = z * z + c;
        iterations += 1;
    }
    iterations
}
