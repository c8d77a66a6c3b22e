//! Entry parser — splits a history/qualification line into year, month and description.

/// One row of a history table, borrowed from the caller's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryRecord<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub description: &'a str,
}

/// Parses `"<year> <month> <description>"`.
///
/// At most two splits on a single space, so the description keeps its own spaces.
/// Anything that does not yield exactly three parts becomes a description-only row.
/// Never fails.
pub fn parse_entry(raw: &str) -> EntryRecord<'_> {
    let mut parts = raw.splitn(3, ' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(description)) => EntryRecord {
            year,
            month,
            description,
        },
        _ => EntryRecord {
            year: "",
            month: "",
            description: raw,
        },
    }
}
