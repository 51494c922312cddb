use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Error};
use structopt::StructOpt;

use transit_catalogue_cli::logger::init_logger;
use transit_catalogue_cli::process;

#[derive(StructOpt)]
#[structopt(
    name = "transit-catalogue",
    about = "Answer bus, stop, map and route queries over a transport catalogue."
)]
struct Options {
    /// path of the input document; stdin when absent
    #[structopt(short = "i", long = "input", parse(from_os_str))]
    input: Option<PathBuf>,

    /// path of the output document; stdout when absent
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    init_logger();
    let options = Options::from_args();

    let input = match &options.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input from {:?}", path))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read input from stdin")?;
            buffer
        }
    };

    let mut output: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(io::BufWriter::new(fs::File::create(path).with_context(
            || format!("failed to create output file {:?}", path),
        )?)),
        None => Box::new(io::stdout()),
    };

    process(&input, &mut output)?;
    output.flush().context("failed to flush the output")?;
    Ok(())
}
