//! The raster pass: walk every pixel, iterate, color, write.

use itertools::iproduct;

use color::Palette;
use fractal::Fractal;
use viewport::Viewport;

/// Fills `pixels` with one complete frame: for every canvas pixel in
/// row-major order, map it onto the plane, run the recurrence, look
/// up the color, and write three bytes at `(w * py + px) * 3`.
///
/// The buffer is caller-owned and must be exactly `w * h * 3` bytes.
/// Every call recomputes the whole frame; there is no dirty-region
/// tracking and no hidden state, so two calls with the same viewport
/// and variant produce byte-identical buffers.  This is the dominant
/// cost of the program, O(w · h · max_iter) in the worst case, and
/// it runs to completion on the calling thread.
pub fn render(viewport: &Viewport, fractal: Fractal, palette: &Palette, pixels: &mut [u8]) {
    assert!(pixels.len() == viewport.buffer_len());
    trace!("begin raster pass: {}", viewport.summary());
    for (py, px) in iproduct!(0..viewport.h, 0..viewport.w) {
        let c = viewport.plane_point(px, py);
        let count = fractal.escape_time(c, viewport.max_iter);
        let rgb = palette.color_for(count, viewport.max_iter);
        let offset = ((viewport.w * py + px) * 3) as usize;
        pixels[offset..offset + 3].copy_from_slice(&rgb);
    }
    trace!("end raster pass");
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewport::{ButtonState, MouseButton};

    fn small_classic() -> Viewport {
        // Same geometry as the classic 1400x800 session, scaled down
        // so a full frame renders in test time.
        Viewport::new(-2.5, 1.0, -1.0, 1.0, 140, 80, 200, 1.0, false).unwrap()
    }

    #[test]
    fn frames_are_byte_identical_across_calls() {
        let v = small_classic();
        let palette = Palette::new();
        let mut first = vec![0u8; v.buffer_len()];
        let mut second = vec![255u8; v.buffer_len()];
        render(&v, Fractal::Mandelbrot, &palette, &mut first);
        render(&v, Fractal::Mandelbrot, &palette, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn every_pixel_matches_a_direct_evaluation() {
        let v = Viewport::new(-2.5, 1.0, -1.0, 1.0, 20, 12, 60, 1.0, false).unwrap();
        let palette = Palette::new();
        let mut pixels = vec![0u8; v.buffer_len()];
        render(&v, Fractal::Z3, &palette, &mut pixels);
        for py in 0..v.h {
            for px in 0..v.w {
                let count = Fractal::Z3.escape_time(v.plane_point(px, py), v.max_iter);
                let want = palette.color_for(count, v.max_iter);
                let offset = ((v.w * py + px) * 3) as usize;
                assert_eq!(&pixels[offset..offset + 3], &want[..]);
            }
        }
    }

    #[test]
    fn the_sets_interior_renders_black() {
        let v = small_classic();
        let palette = Palette::new();
        let mut pixels = vec![0u8; v.buffer_len()];
        render(&v, Fractal::Mandelbrot, &palette, &mut pixels);
        // Pixel (100, 40) sits at the plane origin, which never
        // escapes.
        let offset = ((v.w * 40 + 100) * 3) as usize;
        assert_eq!(&pixels[offset..offset + 3], &[0, 0, 0]);
        // The far left edge is outside the set and escapes fast.
        let edge = ((v.w * 40) * 3) as usize;
        assert_ne!(&pixels[edge..edge + 3], &[0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn a_missized_buffer_is_refused() {
        let v = small_classic();
        let palette = Palette::new();
        let mut pixels = vec![0u8; v.buffer_len() - 1];
        render(&v, Fractal::Mandelbrot, &palette, &mut pixels);
    }

    #[test]
    fn center_click_zoom_keeps_the_center_pixel_stable() {
        // The end-to-end scenario: click the middle of the frame,
        // apply the proposed zoom, rerender, and the middle pixel
        // still shows the same plane point and so the same color.
        let mut v = small_classic();
        let palette = Palette::new();
        let mut before = vec![0u8; v.buffer_len()];
        render(&v, Fractal::Mandelbrot, &palette, &mut before);

        let delta = v
            .handle_click(70, 40, MouseButton::Left, ButtonState::Pressed)
            .unwrap();
        v.apply(delta);

        assert!((v.center().re - -0.75).abs() < 1e-9);
        assert!(v.center().im.abs() < 1e-9);
        assert!(((v.x1 - v.x0) - 1.75).abs() < 1e-9);

        let mut after = vec![0u8; v.buffer_len()];
        render(&v, Fractal::Mandelbrot, &palette, &mut after);

        let p = v.plane_point(70, 40);
        assert!((p.re - -0.75).abs() < 1e-9);
        assert!(p.im.abs() < 1e-9);

        let offset = ((v.w * 40 + 70) * 3) as usize;
        assert_eq!(
            &before[offset..offset + 3],
            &after[offset..offset + 3]
        );
    }
}
