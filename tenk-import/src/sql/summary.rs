//! Import totals, folded from per-game outcomes

use std::collections::BTreeSet;

/// What one emitted game contributed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub sheet_name: String,
    pub player_names: Vec<String>,
    pub turn_count: usize,
}

/// Totals across all emitted games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub games: usize,
    pub player_records: usize,
    pub turn_records: usize,
    /// Exact, case-sensitive names; sorted
    pub player_names: BTreeSet<String>,
}

impl ImportSummary {
    pub fn record(mut self, outcome: &GameOutcome) -> Self {
        self.games += 1;
        self.player_records += outcome.player_names.len();
        self.turn_records += outcome.turn_count;
        self.player_names.extend(outcome.player_names.iter().cloned());
        self
    }

    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a GameOutcome>) -> Self {
        outcomes.into_iter().fold(Self::default(), Self::record)
    }

    pub fn unique_names(&self) -> usize {
        self.player_names.len()
    }
}
