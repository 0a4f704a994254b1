#![warn(clippy::all, clippy::pedantic)]
extern crate env_logger;
#[macro_use]
extern crate log;

use env_logger::Env;

use responsive_srcset::command_line::Options;
use structopt::StructOpt;

/// Prints the `src`, `srcset` and `sizes` attributes for an image on the CDN as JSON.
///
/// Breakpoints are either given explicitly (`--breakpoints 320,640,1280`) or spread evenly over
/// a range (`--min-width 320 --max-width 1280 --max-images 4`).
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or("RESPONSIVE_SRCSET_LOG", "warn")).init();

    let options = Options::from_args();
    info!("Generating attributes for {}", &options.source);
    let json = responsive_srcset::render_attributes(&options)?;
    println!("{}", json);
    Ok(())
}
