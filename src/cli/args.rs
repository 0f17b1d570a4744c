//! Command-line argument definitions.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::constants;

/// Mirage - extrapolate the next value of integer sequences
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Puzzle day number to run
    pub day: u32,

    /// Input file (defaults to <input_dir>/input_<DAY>.txt)
    #[arg(short, long, env = constants::ENV_INPUT)]
    pub input: Option<PathBuf>,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, env = constants::ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Evaluate lines in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_only() {
        let args = Args::try_parse_from(["mirage", "9"]).unwrap();
        assert_eq!(args.day, 9);
        assert!(!args.parallel);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "mirage", "9", "--input", "in.txt", "--config", "c.toml", "-p", "-vv",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("in.txt")));
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
        assert!(args.parallel);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_parse_malformed_day() {
        assert!(Args::try_parse_from(["mirage", "nine"]).is_err());
        assert!(Args::try_parse_from(["mirage", "-3"]).is_err());
    }
}
