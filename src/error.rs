//! Configuration faults.  Everything the core computes after startup
//! is total, so the only errors that exist are bad startup
//! parameters, and they are fatal: the session either begins with a
//! valid geometry or it does not begin at all.

use failure::Fail;

/// A startup parameter the core refuses to build a session from.
#[derive(Debug, Fail, PartialEq)]
pub enum ConfigError {
    /// The plane rectangle is degenerate on the x axis.
    #[fail(display = "degenerate plane bounds: x0 ({}) must be less than x1 ({})", x0, x1)]
    BadXBounds {
        /// Left edge of the requested rectangle.
        x0: f64,
        /// Right edge of the requested rectangle.
        x1: f64,
    },
    /// The plane rectangle is degenerate on the y axis.
    #[fail(display = "degenerate plane bounds: y0 ({}) must be less than y1 ({})", y0, y1)]
    BadYBounds {
        /// Bottom edge of the requested rectangle.
        y0: f64,
        /// Top edge of the requested rectangle.
        y1: f64,
    },
    /// The canvas has a zero width or height.
    #[fail(display = "canvas dimensions must be positive, got {}x{}", w, h)]
    BadDimensions {
        /// Requested canvas width in pixels.
        w: u32,
        /// Requested canvas height in pixels.
        h: u32,
    },
    /// The canvas width breaks the row-alignment requirement of the
    /// display blit (rows must start on four-byte boundaries).
    #[fail(display = "canvas width {} is not divisible by 4", w)]
    MisalignedWidth {
        /// Requested canvas width in pixels.
        w: u32,
    },
    /// The escape-time iteration cap is zero.
    #[fail(display = "maximum iteration count must be positive")]
    ZeroIterationCap,
    /// The display scale factor is zero, negative, or not a number.
    #[fail(display = "window scale must be positive and finite, got {}", scale)]
    BadWindowScale {
        /// Requested display scale factor.
        scale: f64,
    },
    /// The fractal name does not match any supported variant.
    #[fail(display = "unknown fractal name: {}", _0)]
    UnknownFractal(String),
}
