//! The description of a single render: the size of the image, the
//! region of the complex plane it covers, how deep to iterate, and
//! how to schedule the work.  A `ViewportConfig` can only be built
//! through its validating constructor, and is never mutated
//! afterwards, so it can be shared by reference with every worker.

use std::fmt;
use std::str::FromStr;

use errors::ConfigError;

/// The three interchangeable ways of filling the pixel buffer.  They
/// differ only in schedule, never in output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One thread, rows then columns.
    Sequential,
    /// Every pixel is an independent unit of work.
    PerPixel,
    /// Every row is an independent unit of work.
    PerRow,
}

impl Strategy {
    /// All strategies, in selector order.
    pub const ALL: [Strategy; 3] = [Strategy::Sequential, Strategy::PerPixel, Strategy::PerRow];

    /// The command-line selector for this strategy.
    pub fn selector(self) -> &'static str {
        match self {
            Strategy::Sequential => "seq",
            Strategy::PerPixel => "px",
            Strategy::PerRow => "row",
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seq" => Ok(Strategy::Sequential),
            "px" => Ok(Strategy::PerPixel),
            "row" => Ok(Strategy::PerRow),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.selector())
    }
}

// Bytes in the RGBA encoding of the image.  Every cell is a four-byte
// colour, so this also bounds the pixel buffer itself.
fn encoded_len(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)
        .and_then(|cells| cells.checked_mul(4))
        .filter(|bytes| *bytes <= ::std::isize::MAX as usize)
}

/// A validated, read-only render request.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    width: usize,
    height: usize,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    max_iterations: usize,
    strategy: Strategy,
    threads: usize,
}

impl ViewportConfig {
    /// Validates and builds a configuration.  The worker count for the
    /// pooled strategy defaults to the number of CPUs; see
    /// `with_threads`.  Equal bounds along an axis are accepted and
    /// simply produce a degenerate image.
    pub fn new(
        width: usize,
        height: usize,
        (x_min, x_max): (f64, f64),
        (y_min, y_max): (f64, f64),
        max_iterations: usize,
        strategy: Strategy,
    ) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if encoded_len(width, height).is_none() {
            return Err(ConfigError::TooLarge(width, height));
        }
        if ![x_min, x_max, y_min, y_max].iter().all(|b| b.is_finite()) {
            return Err(ConfigError::NonFiniteBounds);
        }
        if x_min > x_max {
            return Err(ConfigError::InvertedBounds { axis: "x" });
        }
        if y_min > y_max {
            return Err(ConfigError::InvertedBounds { axis: "y" });
        }

        Ok(ViewportConfig {
            width,
            height,
            x_min,
            x_max,
            y_min,
            y_max,
            max_iterations,
            strategy,
            threads: ::num_cpus::get().max(1),
        })
    }

    /// Same as `new`, but takes the strategy as its command-line
    /// selector (`seq`, `px` or `row`).
    pub fn from_selector(
        width: usize,
        height: usize,
        x_bounds: (f64, f64),
        y_bounds: (f64, f64),
        max_iterations: usize,
        selector: &str,
    ) -> Result<Self, ConfigError> {
        let strategy = selector.parse::<Strategy>()?;
        ViewportConfig::new(width, height, x_bounds, y_bounds, max_iterations, strategy)
    }

    /// Bounds the number of workers the per-pixel strategy uses.
    pub fn with_threads(self, threads: usize) -> Result<Self, ConfigError> {
        if threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(ViewportConfig { threads, ..self })
    }

    /// Selects a different strategy for the same viewport.
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        ViewportConfig { strategy, ..self }
    }

    /// Width of the image in pixels; the number of rows.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the image in pixels; the number of cells in a row.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The real-axis bounds, minimum first.
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// The imaginary-axis bounds, minimum first.
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// The iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// How the buffer will be filled.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Worker count for the pooled per-pixel strategy.
    pub fn threads(&self) -> usize {
        self.threads
    }
}
