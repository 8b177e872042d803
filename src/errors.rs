//! Failure types for configuring and running a render.

use std::io;

/// Raised while validating a `ViewportConfig`.  All of these are
/// fatal and are reported before a single pixel is computed.
#[derive(Debug, Fail, PartialEq)]
pub enum ConfigError {
    /// The strategy selector was not one of `seq`, `px` or `row`.
    #[fail(display = "Unknown rendering mode: {}", _0)]
    UnknownStrategy(String),

    /// The image must be at least one pixel wide.
    #[fail(display = "Width must be greater than zero")]
    ZeroWidth,

    /// The image must be at least one pixel high.
    #[fail(display = "Height must be greater than zero")]
    ZeroHeight,

    /// The hue of a pixel is `iterations / max_iterations`, so a zero
    /// cap has no meaningful colour.
    #[fail(display = "Maximum iterations must be greater than zero")]
    ZeroIterations,

    /// The per-pixel worker pool needs at least one worker.
    #[fail(display = "Thread count must be greater than zero")]
    ZeroThreads,

    /// The minimum bound along an axis lies beyond its maximum.
    #[fail(display = "The minimum {} bound is greater than the maximum", axis)]
    InvertedBounds {
        /// Either "x" or "y".
        axis: &'static str,
    },

    /// One of the four plane bounds is NaN or infinite.
    #[fail(display = "Plane bounds must be finite numbers")]
    NonFiniteBounds,

    /// The pixel count, or the RGBA bytes needed to encode it, cannot
    /// be addressed on this platform.
    #[fail(display = "An image of {}x{} pixels is too large", _0, _1)]
    TooLarge(usize, usize),
}

/// Raised by the scheduler.
#[derive(Debug, Fail, PartialEq)]
pub enum RenderError {
    /// The buffer handed to the renderer was not allocated for the
    /// configured viewport.
    #[fail(
        display = "Pixel buffer is {}x{}, expected {}x{}",
        _2, _3, _0, _1
    )]
    BufferMismatch(usize, usize, usize, usize),

    /// A unit of work panicked before the completion barrier.
    #[fail(display = "A render worker panicked")]
    WorkerPanicked,

    /// The operating system refused to start a worker thread.
    #[fail(display = "Could not start a render worker: {}", _0)]
    SpawnFailed(String),
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> RenderError {
        RenderError::SpawnFailed(e.to_string())
    }
}
