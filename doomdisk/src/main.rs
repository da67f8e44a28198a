//TODO: update clap to remove the need for this
#![allow(dangerous_implicit_autorefs)]

use std::path::PathBuf;

use anyhow::Context;
use clap::{crate_authors, crate_description, crate_name, crate_version, App, Arg};
use doomdisk::{default_output_dir, extract, ConsoleProgress, Options, Quiet};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = App::new(crate_name!())
        .author(crate_authors!(", "))
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::with_name("input_disk")
                .help("Disk archive to unpack")
                .required(true)
                .value_name("FILE"),
        )
        .arg(
            Arg::with_name("output_dir")
                .help("Directory to unpack to (defaults to '<input_disk>_unpack')")
                .value_name("DIR"),
        )
        .arg(
            Arg::with_name("overwrite")
                .help("Overwrite existing files")
                .short("o")
                .long("overwrite"),
        )
        .arg(
            Arg::with_name("verbose")
                .help("Print each extracted entry")
                .short("v")
                .long("verbose"),
        )
        .get_matches();

    let input = matches
        .value_of("input_disk")
        .map(PathBuf::from)
        .context("Missing input disk")?;
    let output = match matches.value_of("output_dir") {
        Some(dir) => PathBuf::from(dir),
        None => default_output_dir(&input)?,
    };

    let options = Options {
        overwrite: matches.is_present("overwrite"),
        ..Options::default()
    };

    if matches.is_present("verbose") {
        extract(&input, &output, &options, &mut ConsoleProgress)?;
    } else {
        extract(&input, &output, &options, &mut Quiet)?;
    }

    Ok(())
}
