use capmatch::cli::{self, Cli};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    std::process::exit(cli::run(cli));
}
