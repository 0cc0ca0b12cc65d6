//! Command-line front end for the Quarterturn puzzle engine.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install().expect("error initializing panic handler");

    log::debug!("{}", quarterturn_core::ENGINE_VERSION_STRING);
    cli::exec(args)
}
