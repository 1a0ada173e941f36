//! Import command handler: validate, read, generate, write

use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, Local};
use colored::*;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

use super::ImportArgs;
use crate::sheet::read_game_workbook;
use crate::sql::{GameOutcome, GeneratorOptions, IdMinter, ImportSummary, generate_import_sql};

const EXAMPLE_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

/// What a finished import produced
#[derive(Debug)]
pub struct ImportReport {
    pub output: PathBuf,
    pub games: Vec<GameOutcome>,
    pub summary: ImportSummary,
}

/// Handle the import command and print the result summary
pub fn handle_import_command(args: ImportArgs) -> Result<()> {
    let report = run_import(&args, Local::now())?;
    print_summary(&report);
    Ok(())
}

/// Run the whole pipeline; nothing is written unless validation passes
pub fn run_import(args: &ImportArgs, now: DateTime<Local>) -> Result<ImportReport> {
    let creator = parse_creator(&args.creator)?;

    if !args.spreadsheet.exists() {
        bail!("File not found: {}", args.spreadsheet.display());
    }

    log::info!("Reading workbook: {}", args.spreadsheet.display());
    let sheets = read_game_workbook(&args.spreadsheet)?;

    let source_name = args
        .spreadsheet
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.spreadsheet.display().to_string());

    let options = GeneratorOptions {
        creator,
        source_name,
        generated_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    let mut minter = IdMinter::new(rand::rng());
    let generated = generate_import_sql(&sheets, &options, &mut minter);

    fs::write(&args.output, &generated.sql)
        .with_context(|| format!("Failed to write output to: {}", args.output.display()))?;
    log::info!(
        "Wrote {} bytes to {}",
        generated.sql.len(),
        args.output.display()
    );

    Ok(ImportReport {
        output: args.output.clone(),
        games: generated.outcomes,
        summary: generated.summary,
    })
}

fn parse_creator(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        anyhow!(
            "Invalid UUID format: {}\nYour user ID should look like: {}",
            raw,
            EXAMPLE_USER_ID
        )
    })
}

fn print_summary(report: &ImportReport) {
    let output = report.output.display().to_string();
    let summary = &report.summary;

    println!();
    println!("{} Generated: {}", "Success!".green().bold(), output.bright_green());
    println!();
    println!("  Games:   {}", summary.games.to_string().cyan());
    println!(
        "  Players: {} records ({} unique names)",
        summary.player_records.to_string().cyan(),
        summary.unique_names()
    );
    println!("  Turns:   {}", summary.turn_records.to_string().cyan());
    println!();
    for (index, game) in report.games.iter().enumerate() {
        println!(
            "  {} {} ({} players, {} turns)",
            format!("{}.", index + 1).dimmed(),
            game.sheet_name,
            game.player_names.len(),
            game.turn_count
        );
    }
    if !report.games.is_empty() {
        println!();
    }
    println!("Next steps:");
    println!("  1. Open the database SQL editor");
    println!("  2. Paste contents of {}", output);
    println!("  3. Run the SQL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_xlsxwriter::{Workbook, XlsxError};
    use std::path::Path;

    const CREATOR: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn temp_path(extension: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tenk-import-{}.{}", Uuid::new_v4(), extension))
    }

    fn write_test_workbook(path: &Path) -> Result<(), XlsxError> {
        let mut workbook = Workbook::new();

        let game = workbook.add_worksheet();
        game.set_name("Game Night")?;
        game.write_string(0, 0, "Alice")?;
        game.write_string(0, 1, "O'Brien")?;
        game.write_number(1, 0, 30)?;
        game.write_number(1, 1, 25)?;
        game.write_number(2, 0, 10)?;
        game.write_number(2, 1, 5)?;
        game.write_number(3, 0, 20)?;
        game.write_number(3, 1, 0)?;
        game.write_string(4, 1, "Winner")?;

        let notes = workbook.add_worksheet();
        notes.set_name("Notes")?;
        notes.write_string(3, 0, "scores copied from the paper pad")?;

        workbook.save(path)?;
        Ok(())
    }

    fn make_args(spreadsheet: PathBuf, creator: &str, output: PathBuf) -> ImportArgs {
        ImportArgs {
            spreadsheet,
            creator: creator.to_string(),
            output,
        }
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap()
    }

    #[test]
    fn test_import_workbook_end_to_end() {
        let input = temp_path("xlsx");
        let output = temp_path("sql");
        write_test_workbook(&input).unwrap();

        let report = run_import(&make_args(input.clone(), CREATOR, output.clone()), fixed_now()).unwrap();
        let sql = fs::read_to_string(&output).unwrap();

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);

        assert_eq!(report.output, output);
        assert_eq!(report.summary.games, 1);
        assert_eq!(report.games[0].sheet_name, "Game Night");
        assert_eq!(report.summary.player_records, 2);
        assert_eq!(report.summary.turn_records, 4);
        assert_eq!(report.summary.unique_names(), 2);

        assert!(sql.contains("-- Generated: 2026-03-14 15:09:26\n"));
        assert!(sql.contains(&format!("-- Source: {}\n", input.file_name().unwrap().to_string_lossy())));
        assert!(sql.contains("-- GAME 1: Game Night\n"));
        assert!(sql.contains("-- Winner: O'Brien (25 pts)\n"));
        assert!(sql.contains(", 'O''Brien', true, true, 25, 2, NOW()"));
        assert!(sql.contains(&format!("'{}', 'Alice', false, true, 30, 1, NOW()", CREATOR)));
        assert!(sql.contains("-- Skipped sheet 'Notes' (no valid data)\n"));
        assert!(sql.contains("winning_score = 25\n"));
        assert_eq!(sql.matches("INSERT INTO turns").count(), 4);
    }

    #[test]
    fn test_creator_is_normalized() {
        let input = temp_path("xlsx");
        let output = temp_path("sql");
        write_test_workbook(&input).unwrap();

        let upper = CREATOR.to_uppercase();
        let result = run_import(&make_args(input.clone(), &upper, output.clone()), fixed_now());
        let sql = fs::read_to_string(&output).unwrap_or_default();

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);

        result.unwrap();
        assert!(sql.contains(&format!("'{}',\n    '", CREATOR)));
        assert!(!sql.contains(&upper));
    }

    #[test]
    fn test_invalid_creator_is_rejected() {
        let output = temp_path("sql");
        let args = make_args(PathBuf::from("games.xlsx"), "abc-123-def-456", output.clone());

        let err = run_import(&args, fixed_now()).unwrap_err();
        assert!(err.to_string().contains("Invalid UUID format: abc-123-def-456"));
        assert!(err.to_string().contains(EXAMPLE_USER_ID));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_spreadsheet_is_rejected() {
        let input = temp_path("xlsx");
        let output = temp_path("sql");

        let err = run_import(&make_args(input.clone(), CREATOR, output.clone()), fixed_now()).unwrap_err();
        assert!(err.to_string().starts_with("File not found:"));
        assert!(!output.exists());
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let input = temp_path("xlsx");
        let output = temp_path("sql");
        write_test_workbook(&input).unwrap();
        fs::write(&output, "stale contents").unwrap();

        let result = run_import(&make_args(input.clone(), CREATOR, output.clone()), fixed_now());
        let sql = fs::read_to_string(&output).unwrap_or_default();

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);

        result.unwrap();
        assert!(!sql.contains("stale contents"));
        assert!(sql.starts_with("-- ===="));
    }

    #[test]
    fn test_unreadable_workbook_is_an_error() {
        let input = temp_path("xlsx");
        let output = temp_path("sql");
        fs::write(&input, "not a zip archive").unwrap();

        let result = run_import(&make_args(input.clone(), CREATOR, output.clone()), fixed_now());
        let _ = fs::remove_file(&input);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to open Excel file"));
        assert!(!output.exists());
    }
}
