#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelzoom core
//!
//! An interactive explorer for escape-time fractals.  A fractal of
//! this family takes a point on the complex plane and feeds it
//! through a recurrence, measuring how many steps it takes for the
//! value to fly off to infinity.  That step count, the "escape time,"
//! is what gets painted: points that escape quickly get one color,
//! points that escape slowly another, and points that never escape at
//! all form the black body of the set.
//!
//! The crate owns the numeric heart of the explorer: the four
//! recurrence variants ([`fractal`]), the viewport that maps screen
//! clicks onto the plane and zooms in or out around them
//! ([`viewport`]), the palette that turns escape times into RGB
//! ([`color`]), and the raster pass that walks every pixel and fills
//! a byte buffer ([`render`]).  Window management, buffer blitting,
//! and the event loop belong to the host; the host hands clicks in
//! and takes finished frames out.

extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod color;
pub mod error;
pub mod fractal;
pub mod render;
pub mod settings;
pub mod viewport;

pub use fractal::Fractal;
pub use viewport::Viewport;
