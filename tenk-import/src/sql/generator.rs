//! SQL generation for parsed game sheets
//!
//! Each game is emitted in an order the target schema accepts:
//! 1. Game row inserted as `active` with no winner
//! 2. Player rows (column A bound to the creator, the rest as guests)
//! 3. Turn rows, players outer, turns inner
//! 4. Game updated to `ended`, with winner id/score when one is marked
//!
//! The schema rejects moving a game to `ended` before it has players, so the
//! status is only finalized after every player and turn row exists.

use rand::Rng;
use uuid::Uuid;

use super::ids::IdMinter;
use super::literal::{bool_literal, optional_uuid_literal, string_literal, uuid_literal};
use super::script::SqlScript;
use super::summary::{GameOutcome, ImportSummary};
use crate::model::{ParsedPlayer, ParsedSheet, SheetContent};

/// Script the guest-claim step points users at
pub const CLAIM_SCRIPT_PATH: &str = "database/manual/claim_guest_player.sql";

/// Inputs that are fixed for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Account the column-A player is linked to
    pub creator: Uuid,
    /// File name shown in the header banner
    pub source_name: String,
    /// Preformatted generation timestamp
    pub generated_at: String,
}

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct GeneratedImport {
    pub sql: String,
    pub outcomes: Vec<GameOutcome>,
    pub summary: ImportSummary,
}

/// A player with its minted row id
struct GamePlayer<'a> {
    id: Uuid,
    player: &'a ParsedPlayer,
}

/// Generate the complete import script for all sheets, in sheet order
pub fn generate_import_sql<R: Rng>(
    sheets: &[ParsedSheet],
    options: &GeneratorOptions,
    minter: &mut IdMinter<R>,
) -> GeneratedImport {
    let mut script = SqlScript::new();
    write_header(&mut script, options);

    let mut outcomes: Vec<GameOutcome> = Vec::new();

    for sheet in sheets {
        match &sheet.content {
            SheetContent::Game(players) if !players.is_empty() => {
                let game_number = outcomes.len() + 1;
                let outcome = write_game(
                    &mut script,
                    game_number,
                    &sheet.name,
                    players,
                    options.creator,
                    minter,
                );
                outcomes.push(outcome);
            }
            SheetContent::Game(_) | SheetContent::Empty => {
                log::warn!("Skipping sheet '{}': no player names in row 1", sheet.name);
                script.comment(format!("Skipped sheet '{}' (no valid data)", sheet.name));
                script.blank();
            }
            SheetContent::Unreadable(reason) => {
                log::warn!("Skipping sheet '{}': {}", sheet.name, reason);
                script.comment(format!(
                    "Skipped sheet '{}' (could not be read: {})",
                    sheet.name, reason
                ));
                script.blank();
            }
        }
    }

    let summary = ImportSummary::from_outcomes(&outcomes);
    write_footer(&mut script, &summary);

    GeneratedImport {
        sql: script.into_string(),
        outcomes,
        summary,
    }
}

fn write_header(script: &mut SqlScript, options: &GeneratorOptions) {
    script.rule();
    script.comment("10K Scorekeeper - Game Import SQL");
    script.comment(format!("Generated: {}", options.generated_at));
    script.comment(format!("Source: {}", options.source_name));
    script.rule();
    script.comment("");
    script.comment("Run this in the database SQL editor");
    script.comment("Column A players are linked to the creator account (is_guest=false)");
    script.comment("All other players are created as guests (is_guest=true, user_id=NULL)");
    script.comment(format!("Use {} to link accounts later", CLAIM_SCRIPT_PATH));
    script.comment("");
    script.rule();
    script.blank();
}

fn write_game<R: Rng>(
    script: &mut SqlScript,
    game_number: usize,
    sheet_name: &str,
    players: &[ParsedPlayer],
    creator: Uuid,
    minter: &mut IdMinter<R>,
) -> GameOutcome {
    let total_rounds = players.iter().map(|p| p.turns.len()).max().unwrap_or(0);
    let winners: Vec<&ParsedPlayer> = players.iter().filter(|p| p.is_winner).collect();
    let winner = winners.first().copied();

    // Descriptive block
    script.rule();
    script.comment(format!("GAME {}: {}", game_number, sheet_name));
    script.comment(format!(
        "Players: {}",
        players
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    script.comment(format!("Rounds: {}", total_rounds));
    match winner {
        Some(w) => script.comment(format!("Winner: {} ({} pts)", w.name, w.total_score)),
        None => script.comment("Winner: Not specified"),
    }
    if winners.len() > 1 {
        let names: Vec<&str> = winners.iter().map(|p| p.name.as_str()).collect();
        log::warn!(
            "Sheet '{}' marks {} winners ({}); using {}",
            sheet_name,
            winners.len(),
            names.join(", "),
            names[0]
        );
        script.comment(format!(
            "WARNING: multiple winners detected ({}); using {}",
            names.join(", "),
            names[0]
        ));
    }
    script.rule();
    script.blank();

    let game_id = minter.uuid();
    let join_code = minter.join_code();

    // Ids must exist before any turn row references them
    let game_players: Vec<GamePlayer> = players
        .iter()
        .map(|player| GamePlayer {
            id: minter.uuid(),
            player,
        })
        .collect();

    let winning_player = game_players.iter().find(|gp| gp.player.is_winner);

    script.comment("Game record (insert as active, will finalize after players)");
    script.line(insert_game_sql(game_id, creator, &join_code, total_rounds));
    script.blank();

    script.comment("Players (first player = game creator)");
    for (index, game_player) in game_players.iter().enumerate() {
        let user_id = if index == 0 { Some(creator) } else { None };
        script.line(insert_player_sql(game_id, game_player, user_id, index + 1));
    }
    script.blank();

    let mut turn_count = 0;
    if players.iter().any(|p| !p.turns.is_empty()) {
        script.comment("Turns");
        for game_player in &game_players {
            for turn in &game_player.player.turns {
                let turn_id = minter.uuid();
                script.line(format!(
                    "INSERT INTO turns (\n    id, game_id, player_id, turn_number, score, is_bust, is_closed, created_at\n) VALUES (\n    {}, {}, {}, {}, {}, {}, true, NOW()\n);",
                    uuid_literal(turn_id),
                    uuid_literal(game_id),
                    uuid_literal(game_player.id),
                    turn.turn_number,
                    turn.score,
                    bool_literal(turn.is_bust()),
                ));
                turn_count += 1;
            }
        }
        script.blank();
    }

    script.comment("Finalize game (set winner and status)");
    script.line(finalize_game_sql(
        game_id,
        winning_player.map(|gp| (gp.id, gp.player.total_score)),
    ));
    script.blank();

    log::info!(
        "Game {} ('{}'): {} players, {} turns, {} rounds",
        game_number,
        sheet_name,
        players.len(),
        turn_count,
        total_rounds
    );

    GameOutcome {
        sheet_name: sheet_name.to_string(),
        player_names: players.iter().map(|p| p.name.clone()).collect(),
        turn_count,
    }
}

fn insert_game_sql(game_id: Uuid, creator: Uuid, join_code: &str, total_rounds: usize) -> String {
    format!(
        "INSERT INTO games (\n    id, created_by_user_id, join_code, status, total_rounds,\n    winning_player_id, winning_score, created_at, updated_at, finished_at\n) VALUES (\n    {},\n    {},\n    {},\n    'active',\n    {},\n    NULL,\n    NULL,\n    NOW(), NOW(), NOW()\n);",
        uuid_literal(game_id),
        uuid_literal(creator),
        string_literal(join_code),
        total_rounds,
    )
}

fn insert_player_sql(
    game_id: Uuid,
    game_player: &GamePlayer,
    user_id: Option<Uuid>,
    display_order: usize,
) -> String {
    format!(
        "INSERT INTO game_players (\n    id, game_id, user_id, player_name, is_guest, is_on_board, total_score, display_order, created_at\n) VALUES (\n    {}, {}, {}, {}, {}, true, {}, {}, NOW()\n);",
        uuid_literal(game_player.id),
        uuid_literal(game_id),
        optional_uuid_literal(user_id),
        string_literal(&game_player.player.name),
        bool_literal(user_id.is_none()),
        game_player.player.total_score,
        display_order,
    )
}

/// Status update; sets winner columns only when there is a winner
fn finalize_game_sql(game_id: Uuid, winner: Option<(Uuid, i64)>) -> String {
    match winner {
        Some((player_id, score)) => format!(
            "UPDATE games SET\n    status = 'ended',\n    winning_player_id = {},\n    winning_score = {}\nWHERE id = {};",
            uuid_literal(player_id),
            score,
            uuid_literal(game_id),
        ),
        None => format!(
            "UPDATE games SET status = 'ended' WHERE id = {};",
            uuid_literal(game_id)
        ),
    }
}

fn write_footer(script: &mut SqlScript, summary: &ImportSummary) {
    script.rule();
    script.comment("IMPORT SUMMARY");
    script.rule();
    script.comment(format!("Games imported: {}", summary.games));
    script.comment(format!("Total player records: {}", summary.player_records));
    script.comment(format!("Total turn records: {}", summary.turn_records));
    script.comment(format!("Unique player names: {}", summary.unique_names()));
    if !summary.player_names.is_empty() {
        script.comment(format!(
            "Players: {}",
            summary
                .player_names
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    script.rule();
    script.blank();
    script.comment("To claim guest players after they sign up, use:");
    script.comment(CLAIM_SCRIPT_PATH);
}
