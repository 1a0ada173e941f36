//! Command-line surface

pub mod commands;

use clap::{ArgAction, Parser};

use commands::import::ImportArgs;

/// Extended usage printed with `--help` and after argument errors
pub const USAGE_GUIDE: &str = "\
Excel format (each sheet = 1 game):
  Row 1: Player names (column A = YOU, the game creator)
  Row 2: Total scores
  Row 3+: Per-round scores (0 = bust)
  'Winner' text in bottom cell of winner's column

Note: Column A player is linked to your account (is_guest=false)
      Other players are guests (claimable later)

Example:
  tenk-import games.xlsx 123e4567-e89b-12d3-a456-426614174000";

#[derive(Parser, Debug)]
#[command(
    name = "tenk-import",
    version,
    about = "10K Scorekeeper - Excel to SQL Import",
    after_help = USAGE_GUIDE
)]
pub struct Cli {
    #[command(flatten)]
    pub import: ImportArgs,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_output_path() {
        let cli = Cli::try_parse_from(["tenk-import", "games.xlsx", "some-user"]).unwrap();
        assert_eq!(cli.import.spreadsheet, PathBuf::from("games.xlsx"));
        assert_eq!(cli.import.creator, "some-user");
        assert_eq!(cli.import.output, PathBuf::from("import_games.sql"));
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_explicit_output_and_flags() {
        let cli =
            Cli::try_parse_from(["tenk-import", "-vv", "--no-color", "g.xlsx", "u", "out.sql"]).unwrap();
        assert_eq!(cli.import.output, PathBuf::from("out.sql"));
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        assert!(cli.no_color);
    }

    #[test]
    fn test_missing_creator_is_usage_error() {
        let err = Cli::try_parse_from(["tenk-import", "games.xlsx"]).unwrap_err();
        assert!(err.use_stderr());
        assert!(Cli::try_parse_from(["tenk-import"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["tenk-import", "-q", "-v", "g.xlsx", "u"]).is_err());
        let cli = Cli::try_parse_from(["tenk-import", "-q", "g.xlsx", "u"]).unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Error);
    }
}
