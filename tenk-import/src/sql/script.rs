//! Line buffer for the generated SQL file

use super::literal::comment_text;

const RULE: &str = "-- ============================================================";

#[derive(Debug, Default)]
pub struct SqlScript {
    text: String,
}

impl SqlScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw line (statements may span several lines)
    pub fn line(&mut self, line: impl AsRef<str>) {
        self.text.push_str(line.as_ref());
        self.text.push('\n');
    }

    pub fn blank(&mut self) {
        self.text.push('\n');
    }

    /// `-- text`, or a bare `--` for empty text
    pub fn comment(&mut self, text: impl AsRef<str>) {
        let text = comment_text(text.as_ref());
        if text.is_empty() {
            self.line("--");
        } else {
            self.line(format!("-- {}", text));
        }
    }

    pub fn rule(&mut self) {
        self.line(RULE);
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_stay_on_one_line() {
        let mut script = SqlScript::new();
        script.comment("Players: Ann\nDROP TABLE games;");
        script.comment("");
        script.rule();

        let text = script.into_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "-- Players: Ann DROP TABLE games;");
        assert_eq!(lines[1], "--");
        assert!(lines[2].starts_with("-- ===="));
    }
}
