// src/bin/cli.rs
use color_eyre::eyre::Result;
use routine_pages::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init("info");

    match cli::parse_args(std::env::args().skip(1))? {
        cli::Parsed::Help => {
            eprintln!("{}", cli::help());
            Ok(())
        }
        cli::Parsed::Run(opts) => Ok(cli::run(&opts)?),
    }
}
