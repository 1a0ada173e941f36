//! Read game sheets from an Excel workbook
//!
//! Every sheet is one game:
//! - Row 1: player names, one per column
//! - Row 2: declared total score per player
//! - Row 3+: per-round scores (0 = bust), or "winner" below the winner's last round

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::path::Path;

use super::cells::{cell_integer, cell_text, header_text};
use crate::model::{ParsedPlayer, ParsedSheet};

/// Marker placed in a player's column to flag the winner (case-insensitive)
pub const WINNER_MARKER: &str = "winner";

/// Sheet rows (0-based)
mod rows {
    pub const NAMES: u32 = 0;
    pub const TOTALS: u32 = 1;
    pub const FIRST_TURN: u32 = 2;
}

/// Read every sheet of a workbook, in workbook order
///
/// Failing to open the workbook is an error. A single sheet that cannot be
/// read is reported as unreadable so the rest still import.
pub fn read_game_workbook<P: AsRef<Path>>(path: P) -> Result<Vec<ParsedSheet>> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    log::debug!("Workbook {} has {} sheets", path.display(), sheet_names.len());

    let mut sheets = Vec::with_capacity(sheet_names.len());

    for sheet_name in sheet_names {
        let sheet = match workbook.worksheet_range(&sheet_name) {
            Ok(range) => match parse_game_sheet(&range) {
                Some(players) => ParsedSheet::game(sheet_name, players),
                None => ParsedSheet::empty(sheet_name),
            },
            Err(e) => {
                log::warn!("Failed to read sheet '{}': {}", sheet_name, e);
                ParsedSheet::unreadable(sheet_name, e.to_string())
            }
        };

        sheets.push(sheet);
    }

    Ok(sheets)
}

/// Parse one sheet into its players
///
/// Returns `None` when no header cell holds a player name.
pub fn parse_game_sheet(range: &Range<Data>) -> Option<Vec<ParsedPlayer>> {
    let (last_row, last_col) = range.end()?;

    let mut players: Vec<ParsedPlayer> = (0..=last_col)
        .filter_map(|col| {
            let name = range.get_value((rows::NAMES, col)).and_then(header_text)?;
            let total_score = range
                .get_value((rows::TOTALS, col))
                .and_then(cell_integer)
                .unwrap_or(0);
            Some(ParsedPlayer::new(name, col, total_score))
        })
        .collect();

    if players.is_empty() {
        return None;
    }

    // One row past the end so a trailing marker row is never missed
    for row in rows::FIRST_TURN..=last_row.saturating_add(1) {
        for player in players.iter_mut() {
            let Some(cell) = range.get_value((row, player.column)) else {
                continue;
            };

            let Some(text) = cell_text(cell) else {
                continue;
            };

            if text.eq_ignore_ascii_case(WINNER_MARKER) {
                player.is_winner = true;
            } else if let Some(score) = cell_integer(cell) {
                player.push_turn(score);
            }
        }
    }

    for player in &players {
        log::debug!(
            "Player '{}' (column {}): {} turns, total {}{}",
            player.name,
            player.column + 1,
            player.turns.len(),
            player.total_score,
            if player.is_winner { ", winner" } else { "" }
        );
    }

    Some(players)
}
