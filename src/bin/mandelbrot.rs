extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate log;
extern crate mandelbrot;

use clap::{App, Arg, ArgMatches};
use failure::Error;
use image::ColorType;
use std::path::Path;
use std::str::FromStr;

use mandelbrot::{PixelBuffer, Renderer, Strategy, ViewportConfig};

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_mode(s: &str) -> Result<(), String> {
    match Strategy::from_str(s) {
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

const MAX_ITERATIONS: &str = "maxIterations";
const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const XMIN: &str = "xMin";
const XMAX: &str = "xMax";
const YMIN: &str = "yMin";
const YMAX: &str = "yMax";
const OUTPUT: &str = "out";
const MODE: &str = "mode";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandelbrot")
        .version("0.1.0")
        .about("Mandelbrot renderer")
        .arg(
            Arg::with_name(MAX_ITERATIONS)
                .long(MAX_ITERATIONS)
                .takes_value(true)
                .default_value("100")
                .validator(|s| validate_number::<usize>(&s, "Could not parse iteration count"))
                .help("Maximum number of Mandelbrot iterations"),
        )
        .arg(
            Arg::with_name(WIDTH)
                .long(WIDTH)
                .takes_value(true)
                .default_value("1000")
                .validator(|s| validate_number::<usize>(&s, "Could not parse image width"))
                .help("Width of the output image"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .long(HEIGHT)
                .takes_value(true)
                .default_value("1000")
                .validator(|s| validate_number::<usize>(&s, "Could not parse image height"))
                .help("Height of the output image"),
        )
        .arg(
            Arg::with_name(XMIN)
                .long(XMIN)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2")
                .validator(|s| validate_number::<f64>(&s, "Could not parse xMin"))
                .help("Minimum value of X painted on image"),
        )
        .arg(
            Arg::with_name(XMAX)
                .long(XMAX)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1")
                .validator(|s| validate_number::<f64>(&s, "Could not parse xMax"))
                .help("Maximum value of X painted on image"),
        )
        .arg(
            Arg::with_name(YMIN)
                .long(YMIN)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2")
                .validator(|s| validate_number::<f64>(&s, "Could not parse yMin"))
                .help("Minimum value of Y painted on image"),
        )
        .arg(
            Arg::with_name(YMAX)
                .long(YMAX)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2")
                .validator(|s| validate_number::<f64>(&s, "Could not parse yMax"))
                .help("Maximum value of Y painted on image"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("output.png")
                .help("Filename of the output image"),
        )
        .arg(
            Arg::with_name(MODE)
                .long(MODE)
                .takes_value(true)
                .default_value("seq")
                .validator(|s| validate_mode(&s))
                .help("Image generation method: seq|px|row"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(|s| validate_number::<usize>(&s, "Could not parse thread count"))
                .help("Number of workers for the px mode (default: one per CPU)"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, Error> {
    let raw = matches.value_of(name).unwrap_or_default();
    T::from_str(raw).map_err(|_| format_err!("Could not parse {}: {:?}", name, raw))
}

fn config(matches: &ArgMatches) -> Result<ViewportConfig, Error> {
    let config = ViewportConfig::from_selector(
        value(matches, WIDTH)?,
        value(matches, HEIGHT)?,
        (value(matches, XMIN)?, value(matches, XMAX)?),
        (value(matches, YMIN)?, value(matches, YMAX)?),
        value(matches, MAX_ITERATIONS)?,
        matches.value_of(MODE).unwrap_or_default(),
    )?;
    if matches.is_present(THREADS) {
        return Ok(config.with_threads(value(matches, THREADS)?)?);
    }
    Ok(config)
}

fn write_image(outfile: &str, buffer: &PixelBuffer) -> Result<(), Error> {
    let limit = u32::max_value() as usize;
    if buffer.width() > limit || buffer.height() > limit {
        bail!(
            "Cannot encode a {}x{} image; the limit is {} pixels per side",
            buffer.width(),
            buffer.height(),
            limit
        );
    }
    let path = Path::new(outfile);
    image::save_buffer(
        path,
        &buffer.to_rgba_bytes(),
        buffer.width() as u32,
        buffer.height() as u32,
        ColorType::RGBA(8),
    )?;
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let config = config(matches)?;
    let mut buffer = PixelBuffer::for_config(&config);
    Renderer::new(config).render(&mut buffer)?;

    let outfile = matches.value_of(OUTPUT).unwrap_or_default();
    write_image(outfile, &buffer)?;
    info!("Wrote {}", outfile);
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
