use seamcarve::logging::{init_logging, level_for_verbosity};
use seamcarve::seamcarver::DEFAULT_PROGRESS_INTERVAL;
use seamcarve::{Finder, SeamCarver};

extern crate clap;
extern crate image;

use clap::{crate_version, value_t, App, Arg};
use failure::Error;
use tracing::info;

fn run() -> Result<(), Error> {
    let default_progress = DEFAULT_PROGRESS_INTERVAL.to_string();
    let matches = App::new("seamcarve")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Shrink an image by removing its least interesting seams")
        .arg(
            Arg::with_name("in")
                .long("in")
                .value_name("FILE")
                .help("The image to shrink")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .value_name("FILE")
                .help("Where to write the result; the extension picks the format")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("N")
                .help("How many columns to remove")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("N")
                .help("How many rows to remove")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("finder")
                .long("finder")
                .help("The seam finding algorithm")
                .takes_value(true)
                .possible_values(&["sweep", "dijkstra"])
                .default_value("sweep"),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("N")
                .help("Report progress every N seams; 0 for never")
                .takes_value(true)
                .default_value(&default_progress),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more still"),
        )
        .get_matches();

    init_logging(level_for_verbosity(matches.occurrences_of("verbose")));

    let width_reduction = value_t!(matches, "width", u32)?;
    let height_reduction = value_t!(matches, "height", u32)?;
    let progress = value_t!(matches, "progress", u32)?;
    let finder = value_t!(matches, "finder", Finder)?;
    let input = matches.value_of("in").unwrap_or_default();
    let output = matches.value_of("out").unwrap_or_default();

    let image = image::open(input)?.to_rgb8();
    info!(
        input,
        width = image.width(),
        height = image.height(),
        "image loaded"
    );

    let carved = SeamCarver::new(&image)
        .with_finder(finder)
        .with_progress_interval(progress)
        .carve(width_reduction, height_reduction)?;

    carved.save(output)?;
    info!(
        output,
        width = carved.width(),
        height = carved.height(),
        "image written"
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("seamcarve: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
