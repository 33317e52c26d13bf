// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::process;

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use seamcarver::{energy_to_image, SeamCarver};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn dimension(matches: &ArgMatches, name: &str, current: u32) -> Result<u32, Error> {
    match matches.value_of(name) {
        None => Ok(current),
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| format_err!("--{} expects a pixel count, got {:?}", name, value)),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    // Both are required arguments; clap has already rejected the
    // command line if either is missing.
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input)?;
    let mut carver = SeamCarver::new(&image)?;
    info!(input, width = carver.width(), height = carver.height(), "loaded");

    if matches.is_present("energy") {
        energy_to_image(carver.energy()).save(output)?;
        return Ok(());
    }

    let width = dimension(matches, "width", carver.width())?;
    let height = dimension(matches, "height", carver.height())?;
    carver.carve(width, height)?;
    carver.into_image().save(output)?;
    info!(output, width, height, "saved");
    Ok(())
}

fn main() {
    let matches = App::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .value_name("PIXELS")
                .help("Target width (defaults to the current width)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .value_name("PIXELS")
                .help("Target height (defaults to the current height)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .conflicts_with_all(&["width", "height"])
                .help("Write the energy map of the input instead of carving it"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log progress to stderr (RUST_LOG overrides the level)"),
        )
        .get_matches();

    if matches.is_present("verbose") {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("seamcarver=debug,seamcarve=info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(err) = run(&matches) {
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}
