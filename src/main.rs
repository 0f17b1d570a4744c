use std::process::ExitCode;

use mirage::cli::commands;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    Ok(ExitCode::from(commands::run_from(std::env::args_os())))
}
