//! The viewport: the rectangle of the complex plane currently on
//! screen, plus the canvas geometry and iteration cap that go with
//! it.
//!
//! The viewport is the only mutable state in the core.  It is owned
//! by the session and mutated in place by zoom operations; the click
//! handler itself is pure and merely proposes a [`ZoomDelta`], which
//! the host applies before asking for a fresh raster.  That two-step
//! split keeps input handling decoupled from drawing.
//!
//! Zoom convention: the `factor` handed to [`Viewport::zoom_focus`]
//! multiplies the visible *span*.  A factor below one shrinks the
//! window onto its focus (zooming in); a factor above one widens it
//! (zooming out).  Both dimensions scale by the same factor, so the
//! aspect ratio established at startup survives every zoom.

use num::Complex;

use error::ConfigError;

/// Span multiplier applied on a left click: halve the window, double
/// the magnification.
pub const ZOOM_IN_FACTOR: f64 = 0.5;

/// Span multiplier applied on a right click: double the window,
/// halve the magnification.
pub const ZOOM_OUT_FACTOR: f64 = 2.0;

/// Which mouse button the host saw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// The primary button; zooms in on the point under the cursor.
    Left,
    /// The secondary button; zooms out around the current center.
    Right,
}

/// Whether the button was going down or coming back up.  Only the
/// press triggers a zoom; releases are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonState {
    /// Button pressed.
    Pressed,
    /// Button released.
    Released,
}

/// A proposed change to the viewport: a new focus and a span
/// multiplier.  Produced by [`Viewport::handle_click`], applied by
/// [`Viewport::apply`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomDelta {
    /// Plane x coordinate to recenter on.
    pub cx: f64,
    /// Plane y coordinate to recenter on.
    pub cy: f64,
    /// Multiplier for the visible span; always positive.
    pub factor: f64,
}

/// The visible rectangle of the plane together with the canvas it is
/// rasterized onto.  One instance exists per session, built from the
/// CLI-resolved startup parameters and alive until the process
/// exits.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Left edge of the visible plane rectangle.
    pub x0: f64,
    /// Right edge of the visible plane rectangle.
    pub x1: f64,
    /// Bottom edge of the visible plane rectangle.
    pub y0: f64,
    /// Top edge of the visible plane rectangle.
    pub y1: f64,
    /// Canvas width in pixels; always positive and divisible by 4.
    pub w: u32,
    /// Canvas height in pixels; always positive.
    pub h: u32,
    /// Escape-time iteration cap; always positive.
    pub max_iter: u32,
    /// Display-only magnification of the host window.  Clicks arrive
    /// in window pixels, so this divides back out when mapping them;
    /// it never touches the raster math.
    pub window_scale: f64,
    /// Whether the host should surface diagnostic snapshots.
    pub debug: bool,
}

impl Viewport {
    /// Validates the startup parameters and builds the session
    /// viewport.  This is the configuration boundary: a degenerate
    /// rectangle, a zero dimension, a misaligned width, a zero
    /// iteration cap, or a bad window scale is refused here, and
    /// nothing past this point checks again.
    pub fn new(
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        w: u32,
        h: u32,
        max_iter: u32,
        window_scale: f64,
        debug: bool,
    ) -> Result<Viewport, ConfigError> {
        if !(x0 < x1) {
            return Err(ConfigError::BadXBounds { x0, x1 });
        }
        if !(y0 < y1) {
            return Err(ConfigError::BadYBounds { y0, y1 });
        }
        if w == 0 || h == 0 {
            return Err(ConfigError::BadDimensions { w, h });
        }
        if w % 4 != 0 {
            return Err(ConfigError::MisalignedWidth { w });
        }
        if max_iter == 0 {
            return Err(ConfigError::ZeroIterationCap);
        }
        if !(window_scale > 0.0 && window_scale.is_finite()) {
            return Err(ConfigError::BadWindowScale {
                scale: window_scale,
            });
        }
        Ok(Viewport {
            x0,
            x1,
            y0,
            y1,
            w,
            h,
            max_iter,
            window_scale,
            debug,
        })
    }

    /// The plane point under a *canvas* pixel.  Row 0 is the top of
    /// the image, so screen y is flipped: it grows downward while
    /// plane y grows upward.  This is the mapping the raster pass
    /// uses; `window_scale` plays no part in it.
    pub fn plane_point(&self, px: u32, py: u32) -> Complex<f64> {
        let dx = (self.x1 - self.x0) / f64::from(self.w);
        let dy = (self.y1 - self.y0) / f64::from(self.h);
        Complex::new(
            self.x0 + f64::from(px) * dx,
            self.y0 + (f64::from(self.h) - f64::from(py)) * dy,
        )
    }

    /// The plane point under a *window* pixel, as delivered by a
    /// click event.  The window is the canvas magnified by
    /// `window_scale`, so the coordinates divide back down before
    /// mapping.  With a scale of 1 this is exactly [`plane_point`].
    ///
    /// Increasing `px` always increases the returned x; increasing
    /// `py` (downward on screen) always decreases the returned y.
    ///
    /// [`plane_point`]: #method.plane_point
    pub fn screen_to_plane(&self, px: u32, py: u32) -> Complex<f64> {
        let dx = (self.x1 - self.x0) / f64::from(self.w);
        let dy = (self.y1 - self.y0) / f64::from(self.h);
        let inv = 1.0 / self.window_scale;
        Complex::new(
            self.x0 + f64::from(px) * inv * dx,
            self.y0 + (f64::from(self.h) - f64::from(py)) * inv * dy,
        )
    }

    /// The center of the visible rectangle.
    pub fn center(&self) -> Complex<f64> {
        Complex::new(
            self.x0 + (self.x1 - self.x0) / 2.0,
            self.y0 + (self.y1 - self.y0) / 2.0,
        )
    }

    /// Recenters the rectangle on `(cx, cy)` and multiplies both
    /// spans by `factor`.  A non-positive or non-finite factor is
    /// rejected and the rectangle left untouched, so the invariant
    /// x0 < x1, y0 < y1 holds unconditionally.  There is no bounds
    /// limiting: the rectangle may shrink or grow without limit,
    /// subject only to f64 precision.
    pub fn zoom_focus(&mut self, cx: f64, cy: f64, factor: f64) {
        if !(factor > 0.0 && factor.is_finite()) {
            warn!("ignoring zoom with bad span factor {}", factor);
            return;
        }
        let half_w = (self.x1 - self.x0) / 2.0 * factor;
        let half_h = (self.y1 - self.y0) / 2.0 * factor;
        self.x0 = cx - half_w;
        self.x1 = cx + half_w;
        self.y0 = cy - half_h;
        self.y1 = cy + half_h;
    }

    /// Turns a raw click into a proposed zoom, or `None` when the
    /// event is not one we act on.  A left press zooms in on the
    /// plane point under the cursor; a right press zooms out around
    /// the current center; releases do nothing.  Pure: the viewport
    /// is not touched until the host applies the delta.
    pub fn handle_click(
        &self,
        px: u32,
        py: u32,
        button: MouseButton,
        state: ButtonState,
    ) -> Option<ZoomDelta> {
        if state != ButtonState::Pressed {
            return None;
        }
        match button {
            MouseButton::Left => {
                let focus = self.screen_to_plane(px, py);
                Some(ZoomDelta {
                    cx: focus.re,
                    cy: focus.im,
                    factor: ZOOM_IN_FACTOR,
                })
            }
            MouseButton::Right => {
                let center = self.center();
                Some(ZoomDelta {
                    cx: center.re,
                    cy: center.im,
                    factor: ZOOM_OUT_FACTOR,
                })
            }
        }
    }

    /// Applies a previously proposed zoom.  After this the host
    /// should rerender; the old raster no longer matches the
    /// rectangle.
    pub fn apply(&mut self, delta: ZoomDelta) {
        self.zoom_focus(delta.cx, delta.cy, delta.factor);
    }

    /// The size in bytes of the RGB buffer a raster pass fills.
    pub fn buffer_len(&self) -> usize {
        (self.w as usize) * (self.h as usize) * 3
    }

    /// A human-readable snapshot of the key session facts, surfaced
    /// when the debug flag is up.
    pub fn summary(&self) -> String {
        format!(
            "bounds x [{:+e}, {:+e}] y [{:+e}, {:+e}], canvas {}x{}, max_iter {}",
            self.x0, self.x1, self.y0, self.y1, self.w, self.h, self.max_iter
        )
    }
}
