//! `tenk-import <excel_file> <user_id> [output_file]`

mod handler;

pub use handler::handle_import_command;

use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "import_games.sql";

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Path to Excel file (.xlsx) with game data
    #[arg(value_name = "EXCEL_FILE")]
    pub spreadsheet: PathBuf,

    /// Your user UUID (from the profiles table)
    #[arg(value_name = "USER_ID")]
    pub creator: String,

    /// Output SQL file
    #[arg(value_name = "OUTPUT_FILE", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}
