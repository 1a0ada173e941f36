//! SQL literal rendering

use uuid::Uuid;

/// Double embedded single quotes
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Quoted string literal: `O'Brien` -> `'O''Brien'`
pub fn string_literal(value: &str) -> String {
    format!("'{}'", escape_sql_string(value))
}

pub fn uuid_literal(id: Uuid) -> String {
    format!("'{}'", id.hyphenated())
}

/// UUID literal or `NULL`
pub fn optional_uuid_literal(id: Option<Uuid>) -> String {
    id.map(uuid_literal).unwrap_or_else(|| "NULL".to_string())
}

pub fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Flatten line breaks so text stays inside a `--` comment
pub fn comment_text(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
