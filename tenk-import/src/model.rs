//! In-memory records produced by the sheet parser

/// One round entry for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTurn {
    /// 1-based, local to the player
    pub turn_number: u32,
    pub score: i64,
}

impl ParsedTurn {
    /// A zero score is a bust
    pub fn is_bust(&self) -> bool {
        self.score == 0
    }
}

/// A player column recognized in a game sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPlayer {
    /// Trimmed header cell
    pub name: String,
    /// Absolute 0-based column in the sheet
    pub column: u32,
    /// Declared total from the totals row (not recomputed from turns)
    pub total_score: i64,
    pub turns: Vec<ParsedTurn>,
    pub is_winner: bool,
}

impl ParsedPlayer {
    pub fn new(name: impl Into<String>, column: u32, total_score: i64) -> Self {
        Self {
            name: name.into(),
            column,
            total_score,
            turns: Vec::new(),
            is_winner: false,
        }
    }

    /// Append a turn numbered after the existing ones
    pub fn push_turn(&mut self, score: i64) {
        let turn_number = self.turns.len() as u32 + 1;
        self.turns.push(ParsedTurn { turn_number, score });
    }
}

/// What a single worksheet turned out to contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetContent {
    /// At least one player column
    Game(Vec<ParsedPlayer>),
    /// No header cell held a player name
    Empty,
    /// The worksheet could not be read at all
    Unreadable(String),
}

/// A worksheet and its parse result, in workbook order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSheet {
    pub name: String,
    pub content: SheetContent,
}

impl ParsedSheet {
    pub fn game(name: impl Into<String>, players: Vec<ParsedPlayer>) -> Self {
        Self {
            name: name.into(),
            content: SheetContent::Game(players),
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: SheetContent::Empty,
        }
    }

    pub fn unreadable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: SheetContent::Unreadable(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_turn_numbers_sequentially() {
        let mut player = ParsedPlayer::new("Alice", 0, 30);
        player.push_turn(10);
        player.push_turn(0);
        player.push_turn(20);

        let numbers: Vec<u32> = player.turns.iter().map(|t| t.turn_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_bust_only_on_zero() {
        assert!(ParsedTurn { turn_number: 1, score: 0 }.is_bust());
        assert!(!ParsedTurn { turn_number: 1, score: 50 }.is_bust());
        assert!(!ParsedTurn { turn_number: 1, score: -50 }.is_bust());
    }
}
