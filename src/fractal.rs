// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time recurrences.
//!
//! Every variant starts from z = 0 and repeatedly applies its own
//! step function to (z, c), where c is the plane point under the
//! pixel.  All four share the exact same escape test, |z|² >= 4, and
//! the same iteration cap, so their counts are directly comparable
//! and one palette serves them all.

use std::str::FromStr;

use num::Complex;

use error::ConfigError;

/// Squared escape radius shared by every variant.  The classical
/// bailout is |z| > 2; comparing squared magnitudes skips the sqrt.
const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// The closed set of supported recurrences.  The variant is chosen
/// once at startup, by name, and never changes for the life of the
/// session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fractal {
    /// The classic: z ← z² + c.
    Mandelbrot,
    /// z ← (|Re z| + i|Im z|)² + c, absolute values taken
    /// component-wise before squaring.
    BurningShip,
    /// The cubic relative: z ← z³ + c.
    Z3,
    /// A trigonometric mixture: z ← tan(z) + z² + c.  There is no
    /// canonical "tan fractal"; this particular blend is this
    /// project's recurrence and is kept stable so renders reproduce.
    TanMixture,
}

impl Fractal {
    /// The name the variant is selected by on the command line.
    pub fn name(&self) -> &'static str {
        match *self {
            Fractal::Mandelbrot => "mandelbrot",
            Fractal::BurningShip => "burning_ship",
            Fractal::Z3 => "z3",
            Fractal::TanMixture => "tan_mixture",
        }
    }

    /// The number of iterations it takes the recurrence seeded at
    /// z = 0 to escape from the point `c`, or `max_iter` if it never
    /// does within the cap.  The returned count is always in
    /// `[0, max_iter]`.
    ///
    /// Numeric anomalies are not errors: an orbit that overflows to
    /// infinity satisfies the escape test and reads as escaped, while
    /// one that degrades to NaN fails every comparison, runs to the
    /// cap, and reads as non-escaping.  Either way the loop
    /// terminates and a count comes back.
    pub fn escape_time(&self, c: Complex<f64>, max_iter: u32) -> u32 {
        let mut z = Complex::new(0.0, 0.0);
        for i in 0..max_iter {
            if z.norm_sqr() >= ESCAPE_RADIUS_SQR {
                return i;
            }
            z = match *self {
                Fractal::Mandelbrot => z * z + c,
                Fractal::BurningShip => {
                    let folded = Complex::new(z.re.abs(), z.im.abs());
                    folded * folded + c
                }
                Fractal::Z3 => z * z * z + c,
                Fractal::TanMixture => z.tan() + z * z + c,
            };
        }
        max_iter
    }
}

impl FromStr for Fractal {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Fractal, ConfigError> {
        match s {
            "mandelbrot" => Ok(Fractal::Mandelbrot),
            "burning_ship" => Ok(Fractal::BurningShip),
            "z3" => Ok(Fractal::Z3),
            "tan_mixture" => Ok(Fractal::TanMixture),
            other => Err(ConfigError::UnknownFractal(other.to_string())),
        }
    }
}

/// All of the variants, in selection order.  Handy for exercising
/// shared properties across the whole set.
pub const ALL_VARIANTS: [Fractal; 4] = [
    Fractal::Mandelbrot,
    Fractal::BurningShip,
    Fractal::Z3,
    Fractal::TanMixture,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        // z = 0, c = 0 is a fixed point of every variant.
        for variant in &ALL_VARIANTS {
            assert_eq!(variant.escape_time(Complex::new(0.0, 0.0), 100), 100);
        }
        assert_eq!(Fractal::Mandelbrot.escape_time(Complex::new(0.0, 0.0), 1), 1);
        assert_eq!(
            Fractal::Mandelbrot.escape_time(Complex::new(0.0, 0.0), 5000),
            5000
        );
    }

    #[test]
    fn points_outside_the_boundary_disk_always_escape() {
        // For |c| >= 2 the very first step lands on c itself, which
        // already satisfies the escape test.
        let outside = [
            Complex::new(3.0, 0.0),
            Complex::new(0.0, -2.5),
            Complex::new(-2.0, 2.0),
            Complex::new(2.0, 0.0),
        ];
        for variant in &ALL_VARIANTS {
            for c in &outside {
                let count = variant.escape_time(*c, 100);
                assert!(count < 100, "{} failed to escape from {}", variant.name(), c);
            }
        }
    }

    #[test]
    fn three_escapes_almost_immediately() {
        let count = Fractal::Mandelbrot.escape_time(Complex::new(3.0, 0.0), 100);
        assert!(count <= 3);
    }

    #[test]
    fn count_never_exceeds_the_cap() {
        for variant in &ALL_VARIANTS {
            for i in 0..64 {
                let c = Complex::new(-2.5 + 0.05 * f64::from(i), 0.03 * f64::from(i));
                assert!(variant.escape_time(c, 50) <= 50);
            }
        }
    }

    #[test]
    fn variants_parse_by_their_historical_names() {
        assert_eq!("mandelbrot".parse(), Ok(Fractal::Mandelbrot));
        assert_eq!("burning_ship".parse(), Ok(Fractal::BurningShip));
        assert_eq!("z3".parse(), Ok(Fractal::Z3));
        assert_eq!("tan_mixture".parse(), Ok(Fractal::TanMixture));
        for variant in &ALL_VARIANTS {
            assert_eq!(variant.name().parse(), Ok(*variant));
        }
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        let err = Fractal::from_str("julia").unwrap_err();
        assert_eq!(err, ConfigError::UnknownFractal("julia".to_string()));
    }

    #[test]
    fn polynomial_variants_are_conjugation_symmetric() {
        // Conjugating c conjugates the whole orbit of z² + c and
        // z³ + c, so the escape depth cannot change.
        for i in 0..32 {
            let c = Complex::new(-2.0 + 0.1 * f64::from(i), 0.7);
            let conj = Complex::new(c.re, -c.im);
            assert_eq!(
                Fractal::Mandelbrot.escape_time(c, 200),
                Fractal::Mandelbrot.escape_time(conj, 200)
            );
            assert_eq!(
                Fractal::Z3.escape_time(c, 200),
                Fractal::Z3.escape_time(conj, 200)
            );
        }
    }
}
