//! Puzzle dispatch and exit-code mapping.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::cli::args::Args;
use crate::config::Config;
use crate::constants;
use crate::core::{extrapolate_file, ExecutionMode, Report};
use crate::logging;

/// Puzzles this binary knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    /// Sequence extrapolation.
    Day9,
}

impl Puzzle {
    /// Looks up the puzzle registered for a day number.
    #[must_use]
    pub const fn from_day(day: u32) -> Option<Self> {
        match day {
            9 => Some(Self::Day9),
            _ => None,
        }
    }

    #[must_use]
    pub const fn day(self) -> u32 {
        match self {
            Self::Day9 => 9,
        }
    }

    /// `<input_dir>/input_<day>.txt`
    #[must_use]
    pub fn default_input(self, input_dir: &Path) -> PathBuf {
        input_dir.join(format!("input_{}.txt", self.day()))
    }

    /// Runs the puzzle against `input`.
    ///
    /// # Errors
    ///
    /// Fails if the input cannot be read or a line has no integers.
    pub fn run(self, input: &Path, mode: ExecutionMode) -> Result<Report> {
        match self {
            Self::Day9 => extrapolate_file(input, mode)
                .wrap_err_with(|| format!("day {} failed on {}", self.day(), input.display())),
        }
    }
}

/// Parses `argv`, runs the requested puzzle, and returns the process exit code.
pub fn run_from<I, T>(argv: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => return report_parse_error(&e),
    };
    dispatch(&args)
}

fn report_parse_error(e: &clap::Error) -> u8 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            constants::EXIT_SUCCESS
        }
        ErrorKind::MissingRequiredArgument => {
            eprintln!("{}", constants::CLI_MSG_SPECIFY_DAY);
            let _ = e.print();
            constants::EXIT_USAGE
        }
        _ => {
            let _ = e.print();
            constants::EXIT_USAGE
        }
    }
}

/// Runs an already-parsed command line.
#[must_use]
pub fn dispatch(args: &Args) -> u8 {
    // Unknown days exit before any config is read.
    let Some(puzzle) = Puzzle::from_day(args.day) else {
        eprintln!("{}{}", constants::CLI_MSG_UNKNOWN_DAY, args.day);
        return constants::EXIT_UNKNOWN_DAY;
    };

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logging::init(&logging::effective_level(
                constants::DEFAULT_LOG_LEVEL,
                args.verbose,
            ));
            eprintln!("{}{e}", constants::CLI_MSG_ERROR);
            return constants::EXIT_FAILURE;
        }
    };
    logging::init(&logging::effective_level(&config.logging.level, args.verbose));

    let input = resolve_input(args, &config, puzzle);
    let mode = ExecutionMode::from_parallel_flag(args.parallel || config.parallel);
    tracing::debug!("running {puzzle:?} on {} ({mode:?})", input.display());

    match puzzle.run(&input, mode) {
        Ok(report) => {
            println!("{report}");
            constants::EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{}{e:?}", constants::CLI_MSG_ERROR);
            constants::EXIT_FAILURE
        }
    }
}

/// `--input` (or its env var) wins over the config's input directory.
fn resolve_input(args: &Args, config: &Config, puzzle: Puzzle) -> PathBuf {
    args.input
        .clone()
        .unwrap_or_else(|| puzzle.default_input(&config.input_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(day: u32, input: Option<PathBuf>, config: PathBuf) -> Args {
        Args {
            day,
            input,
            config: Some(config),
            parallel: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_puzzle_lookup() {
        assert_eq!(Puzzle::from_day(9), Some(Puzzle::Day9));
        assert_eq!(Puzzle::from_day(1), None);
        assert_eq!(Puzzle::from_day(0), None);
        assert_eq!(Puzzle::Day9.day(), 9);
    }

    #[test]
    fn test_default_input_path() {
        assert_eq!(
            Puzzle::Day9.default_input(Path::new("inputs")),
            PathBuf::from("inputs/input_9.txt")
        );
    }

    #[test]
    fn test_resolve_input_prefers_flag() {
        let config = Config::default();
        let mut args = args_for(9, None, PathBuf::from("unused.toml"));
        assert_eq!(
            resolve_input(&args, &config, Puzzle::Day9),
            PathBuf::from("inputs/input_9.txt")
        );
        args.input = Some(PathBuf::from("other.txt"));
        assert_eq!(
            resolve_input(&args, &config, Puzzle::Day9),
            PathBuf::from("other.txt")
        );
    }

    #[test]
    fn test_dispatch_success() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        fs::write(&input, "0 3 6 9 12 15\n1 3 6 10 15 21\n").unwrap();
        let args = args_for(9, Some(input), temp_dir.path().join("config.toml"));
        assert_eq!(dispatch(&args), constants::EXIT_SUCCESS);
    }

    #[test]
    fn test_dispatch_unknown_day() {
        let temp_dir = TempDir::new().unwrap();
        let args = args_for(4, None, temp_dir.path().join("config.toml"));
        assert_eq!(dispatch(&args), constants::EXIT_UNKNOWN_DAY);
    }

    #[test]
    fn test_dispatch_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let args = args_for(
            9,
            Some(temp_dir.path().join("missing.txt")),
            temp_dir.path().join("config.toml"),
        );
        assert_eq!(dispatch(&args), constants::EXIT_FAILURE);
    }

    #[test]
    fn test_dispatch_invalid_line() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        fs::write(&input, "1 2 3\nnot numbers\n").unwrap();
        let args = args_for(9, Some(input), temp_dir.path().join("config.toml"));
        assert_eq!(dispatch(&args), constants::EXIT_FAILURE);
    }

    #[test]
    fn test_dispatch_bad_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("config.toml");
        fs::write(&config, "input_dir = [1, 2]\n").unwrap();
        let args = args_for(9, None, config);
        assert_eq!(dispatch(&args), constants::EXIT_FAILURE);
    }

    #[test]
    fn test_dispatch_unknown_day_with_bad_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("config.toml");
        fs::write(&config, "input_dir = [1, 2]\n").unwrap();
        let args = args_for(4, None, config);
        assert_eq!(dispatch(&args), constants::EXIT_UNKNOWN_DAY);
    }

    #[test]
    fn test_run_from_usage_errors() {
        assert_eq!(run_from(["mirage"]), constants::EXIT_USAGE);
        assert_eq!(run_from(["mirage", "nine"]), constants::EXIT_USAGE);
    }

    #[test]
    fn test_run_from_help() {
        assert_eq!(run_from(["mirage", "--help"]), constants::EXIT_SUCCESS);
    }
}
