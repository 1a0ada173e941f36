//! Conversion of calamine cells into names and scores

use calamine::Data;

/// Trimmed, non-empty text of a cell
///
/// Numbers are rendered the way they display (whole floats without the `.0`).
/// Booleans, dates and error cells carry no usable text.
pub fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        _ => return None,
    };

    if text.is_empty() { None } else { Some(text) }
}

/// Player name from a header cell
///
/// Any non-blank cell names a player, including booleans, dates and error
/// values, which are rendered as text.
pub fn header_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(_) | Data::Int(_) | Data::Float(_) => return cell_text(cell),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        other => other.to_string().trim().to_string(),
    };

    if text.is_empty() { None } else { Some(text) }
}

/// Integer value of a cell, if it holds one
///
/// Fractional numbers truncate toward zero. Text is accepted when it parses
/// as an integer after trimming.
pub fn cell_integer(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) => {
            if f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                Some(f.trunc() as i64)
            } else {
                None
            }
        }
        Data::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
