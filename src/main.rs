//! boomi-guard CLI entry point

use boomi_guard::cli::{Cli, check::run_check};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    process::exit(run_check(&cli));
}
