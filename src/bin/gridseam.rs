use clap::{App, Arg};
use failure::{err_msg, Error};
use gridseam::raster::{energy_image, grid_from_image, image_from_grid};
#[cfg(not(feature = "threaded"))]
use gridseam::SerialExecutor;
#[cfg(feature = "threaded")]
use gridseam::ThreadedExecutor;
use gridseam::{estimate_energy, Carver};

fn main() -> Result<(), Error> {
    let matches = App::new("gridseam")
        .version("0.1.0")
        .about("Content-aware width reduction for images")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .help("Target width in columns"),
        )
        .arg(
            Arg::with_name("threshold")
                .short("t")
                .long("threshold")
                .takes_value(true)
                .help("Stop carving once the cheapest seam's energy exceeds this"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the energy map of the input instead of carving"),
        )
        .get_matches();

    let image = image::open(matches.value_of("input").unwrap())?;
    let grid = grid_from_image(&image);

    #[cfg(feature = "threaded")]
    let executor = ThreadedExecutor::new();
    #[cfg(not(feature = "threaded"))]
    let executor = SerialExecutor;

    let output = matches.value_of("output").unwrap();
    if matches.is_present("energy") {
        let energy = estimate_energy(&grid, &executor)?;
        energy_image(&energy).save(output)?;
        return Ok(());
    }

    let target: u32 = matches
        .value_of("width")
        .ok_or_else(|| err_msg("--width is required unless --energy is given"))?
        .parse()?;

    let mut carver = Carver::new(&executor);
    if let Some(threshold) = matches.value_of("threshold") {
        carver = carver.energy_threshold(threshold.parse()?);
    }

    let before = grid.width();
    let result = carver.carve(grid, target)?;
    if result.halted_early {
        println!(
            "halted early: {} -> {} columns (cheapest seam over threshold)",
            before, result.final_width
        );
    } else {
        println!("{} -> {} columns", before, result.final_width);
    }
    image_from_grid(&result.grid).save(output)?;
    Ok(())
}
