//! The palette table and the mapping from escape times to RGB.
//!
//! The palette is built exactly once at startup and read for the
//! rest of the session.  It is a plain gradient: a handful of control
//! colors, linearly interpolated across the index space, with the
//! last control repeating the first so the gradient wraps cleanly
//! when escape counts cycle past the end of the table.

/// Largest valid palette index.  The table holds
/// `MAX_COLOR_INDEX + 1` entries.
pub const MAX_COLOR_INDEX: usize = 255;

/// The color given to points that never escape within the cap.
const INSIDE: [u8; 3] = [0, 0, 0];

/// Gradient anchors, deep blue through white and orange and back.
/// The first and last entries match so index MAX_COLOR_INDEX sits
/// next to index 0 without a visible seam.
const CONTROL_POINTS: [[u8; 3]; 6] = [
    [0, 7, 100],
    [32, 107, 203],
    [237, 255, 255],
    [255, 170, 0],
    [106, 52, 3],
    [0, 7, 100],
];

/// The read-only color lookup table.  Built once, then shared with
/// every raster pass for the life of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    table: Vec<[u8; 3]>,
}

impl Palette {
    /// Builds the full table by interpolating the control points
    /// across `MAX_COLOR_INDEX + 1` slots.  Entirely deterministic:
    /// two runs of the program color identical counts identically.
    pub fn new() -> Palette {
        let spans = CONTROL_POINTS.len() - 1;
        let mut table = Vec::with_capacity(MAX_COLOR_INDEX + 1);
        for i in 0..=MAX_COLOR_INDEX {
            let t = (i as f64) / (MAX_COLOR_INDEX as f64) * (spans as f64);
            let span = (t as usize).min(spans - 1);
            let frac = t - (span as f64);
            let lo = CONTROL_POINTS[span];
            let hi = CONTROL_POINTS[span + 1];
            let lerp = |a: u8, b: u8| {
                (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8
            };
            table.push([lerp(lo[0], hi[0]), lerp(lo[1], hi[1]), lerp(lo[2], hi[2])]);
        }
        Palette { table }
    }

    /// The number of entries in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table holds no colors.  It never does; this
    /// exists to keep `len` honest.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Maps an escape count to a color.  Counts that reached the cap
    /// are "inside the set" and come back black; everything else
    /// indexes the table cyclically, so only `count % len` matters.
    pub fn color_for(&self, count: u32, max_iter: u32) -> [u8; 3] {
        if count >= max_iter {
            INSIDE
        } else {
            self.table[(count as usize) % self.table.len()]
        }
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette::new()
    }
}
