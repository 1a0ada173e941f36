//! Sheet parser: turns workbook sheets into player records
//!
//! Sheet layout (one game per sheet):
//! - Row 1: player names (column A = the importing user)
//! - Row 2: declared total scores
//! - Row 3+: per-round scores, with "winner" in the cell below the winner's last round

mod cells;
mod reader;

pub use reader::read_game_workbook;

#[cfg(test)]
pub(crate) use reader::{parse_game_sheet, tests::make_test_sheet};
