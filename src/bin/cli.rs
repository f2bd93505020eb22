// src/bin/cli.rs
use flight_scrape::{
    cli,
    log::{self, LogTarget},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(LogTarget::Stderr);
    cli::run()
}
