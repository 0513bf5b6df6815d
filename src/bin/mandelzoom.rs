extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate image;
#[macro_use]
extern crate log;
extern crate mandelzoom;

use clap::{App, Arg, ArgMatches};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use mandelzoom::color::Palette;
use mandelzoom::fractal::Fractal;
use mandelzoom::render::render;
use mandelzoom::settings::Settings;
use mandelzoom::viewport::{ButtonState, MouseButton};

/// Given a string and a separator, returns the two values separated
/// by the separator.
fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_num<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const FRACTAL: &str = "fractal-name";
const X0: &str = "x0";
const X1: &str = "x1";
const Y0: &str = "y0";
const Y1: &str = "y1";
const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const ITERATIONS: &str = "max-iteration";
const SCALE: &str = "scale-window";
const DEBUG: &str = "debug";
const ZOOM_IN: &str = "zoom-in";
const ZOOM_OUT: &str = "zoom-out";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandelzoom")
        .version("0.1.0")
        .about("A simple interactive Mandelbrot-family zoomer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("File to write the rendered frame to (binary PPM)"),
        )
        .arg(
            Arg::with_name(FRACTAL)
                .long(FRACTAL)
                .short("f")
                .takes_value(true)
                .default_value("mandelbrot")
                .help("Fractal to use: mandelbrot, burning_ship, z3, or tan_mixture"),
        )
        .arg(
            Arg::with_name(X0)
                .long(X0)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.5")
                .validator(|s| validate_num::<f64>(&s, "Could not parse x0"))
                .help("Smallest x coordinate on the screen"),
        )
        .arg(
            Arg::with_name(X1)
                .long(X1)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0")
                .validator(|s| validate_num::<f64>(&s, "Could not parse x1"))
                .help("Largest x coordinate on the screen"),
        )
        .arg(
            Arg::with_name(Y0)
                .long(Y0)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-1.0")
                .validator(|s| validate_num::<f64>(&s, "Could not parse y0"))
                .help("Smallest y coordinate on the screen"),
        )
        .arg(
            Arg::with_name(Y1)
                .long(Y1)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0")
                .validator(|s| validate_num::<f64>(&s, "Could not parse y1"))
                .help("Largest y coordinate on the screen"),
        )
        .arg(
            Arg::with_name(WIDTH)
                .long(WIDTH)
                .short("w")
                .takes_value(true)
                .default_value("0")
                .validator(|s| validate_num::<u32>(&s, "Could not parse width"))
                .help("Width of the canvas; 0 derives it from the bounds"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .long(HEIGHT)
                .takes_value(true)
                .default_value("0")
                .validator(|s| validate_num::<u32>(&s, "Could not parse height"))
                .help("Height of the canvas; 0 derives it from the bounds"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("m")
                .takes_value(true)
                .default_value("5000")
                .validator(|s| validate_num::<u32>(&s, "Could not parse iteration count"))
                .help("Maximum number of iterations in the escape time calculation"),
        )
        .arg(
            Arg::with_name(SCALE)
                .long(SCALE)
                .short("s")
                .takes_value(true)
                .default_value("1.0")
                .validator(|s| validate_num::<f64>(&s, "Could not parse window scale"))
                .help("Scales the window by the given factor without affecting the resolution"),
        )
        .arg(
            Arg::with_name(DEBUG)
                .long(DEBUG)
                .short("d")
                .help("Log debug information about the session"),
        )
        .arg(
            Arg::with_name(ZOOM_IN)
                .long(ZOOM_IN)
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|s| {
                    validate_pair::<u32>(&s, ',', "Could not parse zoom-in pixel coordinates")
                })
                .help("Simulate a left click at PX,PY before rendering; may repeat"),
        )
        .arg(
            Arg::with_name(ZOOM_OUT)
                .long(ZOOM_OUT)
                .multiple(true)
                .help("Simulate a right click (zoom out); may repeat"),
        )
        .get_matches()
}

fn write_image(outfile: &str, pixels: &[u8], bounds: (u32, u32)) -> Result<(), std::io::Error> {
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
    encoder.encode(pixels, bounds.0, bounds.1, ColorType::RGB(8))?;
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let fractal = Fractal::from_str(matches.value_of(FRACTAL).unwrap())?;

    let mut settings = Settings::default();
    settings.x0 = f64::from_str(matches.value_of(X0).unwrap())?;
    settings.x1 = f64::from_str(matches.value_of(X1).unwrap())?;
    settings.y0 = f64::from_str(matches.value_of(Y0).unwrap())?;
    settings.y1 = f64::from_str(matches.value_of(Y1).unwrap())?;
    settings.w = u32::from_str(matches.value_of(WIDTH).unwrap())?;
    settings.h = u32::from_str(matches.value_of(HEIGHT).unwrap())?;
    settings.max_iter = u32::from_str(matches.value_of(ITERATIONS).unwrap())?;
    settings.window_scale = f64::from_str(matches.value_of(SCALE).unwrap())?;
    settings.debug = matches.is_present(DEBUG);
    settings.adjust_aspect_ratio();

    let mut viewport = settings.into_viewport()?;
    info!("fractal name: {}", fractal.name());
    if viewport.debug {
        info!("{}", viewport.summary());
    }

    // Replay any simulated clicks through the two-step protocol: the
    // click proposes a delta, we apply it, and the render below picks
    // up the final rectangle.
    if let Some(values) = matches.values_of(ZOOM_IN) {
        for value in values {
            let (px, py) = parse_pair::<u32>(value, ',').expect("validated by clap");
            if let Some(delta) = viewport.handle_click(px, py, MouseButton::Left, ButtonState::Pressed)
            {
                viewport.apply(delta);
                if viewport.debug {
                    info!("zoomed in at ({}, {}): {}", px, py, viewport.summary());
                }
            }
        }
    }
    for _ in 0..matches.occurrences_of(ZOOM_OUT) {
        if let Some(delta) = viewport.handle_click(0, 0, MouseButton::Right, ButtonState::Pressed) {
            viewport.apply(delta);
            if viewport.debug {
                info!("zoomed out: {}", viewport.summary());
            }
        }
    }

    let palette = Palette::new();
    let mut pixels = vec![0u8; viewport.buffer_len()];
    render(&viewport, fractal, &palette, &mut pixels);
    write_image(
        matches.value_of(OUTPUT).unwrap(),
        &pixels,
        (viewport.w, viewport.h),
    )?;
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }
}
