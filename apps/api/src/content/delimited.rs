//! `|`-delimited list fields.
//!
//! Education, experience and project records store short lists (achievements,
//! technologies, highlights) as flat text joined with `|`.

pub const DELIMITER: char = '|';

/// Splits a delimited field into trimmed, non-empty items, preserving order.
///
/// Stray, leading, trailing or repeated delimiters and whitespace-only segments
/// yield fewer items, never an error.
pub fn expand(raw: Option<&str>) -> Vec<String> {
    raw.map(|text| {
        text.split(DELIMITER)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
