//! Startup parameter resolution: the defaults, the aspect-ratio
//! adjuster, and the hand-off into a validated [`Viewport`].
//!
//! [`Viewport`]: ../viewport/struct.Viewport.html

use error::ConfigError;
use viewport::Viewport;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_W: u32 = 1400;
/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_H: u32 = 800;
/// Default escape-time iteration cap.
pub const DEFAULT_MAX_ITER: u32 = 5000;

/// The raw session parameters as resolved from the command line,
/// before validation.  A width or height of zero means "derive me
/// from the other dimension and the plane bounds."
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Left edge of the plane rectangle.
    pub x0: f64,
    /// Right edge of the plane rectangle.
    pub x1: f64,
    /// Bottom edge of the plane rectangle.
    pub y0: f64,
    /// Top edge of the plane rectangle.
    pub y1: f64,
    /// Canvas width in pixels, or zero to derive it.
    pub w: u32,
    /// Canvas height in pixels, or zero to derive it.
    pub h: u32,
    /// Escape-time iteration cap.
    pub max_iter: u32,
    /// Display-only window magnification.
    pub window_scale: f64,
    /// Whether to surface diagnostic snapshots.
    pub debug: bool,
}

impl Default for Settings {
    /// The classic full view of the Mandelbrot set.
    fn default() -> Settings {
        Settings {
            x0: -2.5,
            x1: 1.0,
            y0: -1.0,
            y1: 1.0,
            w: 0,
            h: 0,
            max_iter: DEFAULT_MAX_ITER,
            window_scale: 1.0,
            debug: false,
        }
    }
}

/// Rounds a width up to the next multiple of 4, the row alignment
/// the display blit needs.  An already aligned width stays put.
fn align_width(w: u32) -> u32 {
    if w % 4 == 0 {
        w
    } else {
        w + (4 - w % 4)
    }
}

impl Settings {
    /// Fills in whichever canvas dimension was left at zero so that
    /// the pixel aspect ratio matches the plane rectangle and the
    /// width lands on a four-pixel boundary.  Both dimensions zero
    /// gets the stock 1400x800 canvas; both dimensions set are taken
    /// as given and validated later.
    pub fn adjust_aspect_ratio(&mut self) {
        let dx = self.x1 - self.x0;
        let dy = self.y1 - self.y0;
        if self.w == 0 && self.h == 0 {
            self.w = DEFAULT_CANVAS_W;
            self.h = DEFAULT_CANVAS_H;
        } else if self.h == 0 {
            self.w = align_width(self.w);
            self.h = (f64::from(self.w) * dy / dx) as u32;
        } else if self.w == 0 {
            self.w = align_width((f64::from(self.h) * dx / dy) as u32);
            // Aligning the width may have stretched it; re-derive the
            // height so the frame stays undistorted.
            self.h = (f64::from(self.w) * dy / dx) as u32;
        }
    }

    /// Validates the resolved parameters and builds the session
    /// viewport.
    pub fn into_viewport(self) -> Result<Viewport, ConfigError> {
        Viewport::new(
            self.x0,
            self.x1,
            self.y0,
            self.y1,
            self.w,
            self.h,
            self.max_iter,
            self.window_scale,
            self.debug,
        )
    }
}
