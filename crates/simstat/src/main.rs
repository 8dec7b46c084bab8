use std::process::ExitCode;

use clap::Parser;
use simstat::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match simstat::run(&cli) {
        Ok(table) => {
            print!("{table}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
