//! Colouring by escape speed.  The iteration count picks a hue around
//! the colour wheel; points that reach the cap are presumed to be in
//! the set and are painted black.

/// An opaque 8-bit-per-channel colour, as handed to image encoders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.  Every painted pixel is fully opaque; only an
    /// unpainted cell is transparent.
    pub a: u8,
}

impl Color {
    /// The four channels in RGBA order.
    pub fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A colour in hue (degrees), saturation and lightness, the latter two
/// in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    /// Degrees around the colour wheel, `[0, 360]`.
    pub hue: f64,
    /// Always 1.0 for escape-time colouring.
    pub saturation: f64,
    /// 0.0 for points in the set, 0.5 otherwise.
    pub lightness: f64,
}

impl Hsl {
    /// Maps an iteration count onto the colour wheel.  The caller
    /// guarantees `max_iterations > 0`; `ViewportConfig` refuses to be
    /// built otherwise.
    pub fn for_iterations(iterations: usize, max_iterations: usize) -> Hsl {
        let hue = (iterations as f64 / max_iterations as f64) * 360.0;
        let lightness = if iterations == max_iterations { 0.0 } else { 0.5 };
        Hsl {
            hue,
            saturation: 1.0,
            lightness,
        }
    }

    /// Converts to RGB.  Each channel is first widened to 16 bits and
    /// then truncated to 8, as 16-bit image pipelines do.
    pub fn to_color(&self) -> Color {
        let (r, g, b) = self.to_rgb();
        Color {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
            a: 255,
        }
    }

    /// The unquantised red, green and blue components, each in `[0, 1]`.
    pub fn to_rgb(&self) -> (f64, f64, f64) {
        let (s, l) = (self.saturation, self.lightness);
        if s == 0.0 {
            return (l, l, l);
        }

        let t1 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let t2 = 2.0 * l - t1;
        let h = self.hue / 360.0;

        (
            hue_to_channel(t1, t2, h + 1.0 / 3.0),
            hue_to_channel(t1, t2, h),
            hue_to_channel(t1, t2, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(t1: f64, t2: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if 6.0 * t < 1.0 {
        t2 + (t1 - t2) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        t1
    } else if 3.0 * t < 2.0 {
        t2 + (t1 - t2) * (2.0 / 3.0 - t) * 6.0
    } else {
        t2
    }
}

#[inline]
fn quantize(channel: f64) -> u8 {
    (((channel * 65535.0 + 0.5) as u32) >> 8) as u8
}

/// The colour of a pixel whose orbit took `iterations` steps to
/// escape.
pub fn color_for(iterations: usize, max_iterations: usize) -> Color {
    Hsl::for_iterations(iterations, max_iterations).to_color()
}
