use crate::event::{EventId, KillEvent};
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Substring that marks a line as a kill/death record.
pub const DEATH_MARKER: &str = "<Actor Death>";

//-----------------------------------------------------------------------------
// Field delimiters (start token, end token)
//-----------------------------------------------------------------------------

const KILLED_PLAYER: (&str, &str) = ("CActor::Kill: '", "'");
const ZONE: (&str, &str) = ("in zone '", "'");
const KILLER: (&str, &str) = ("killed by '", "'");
const WEAPON: (&str, &str) = ("using '", "'");
const WEAPON_CLASS: (&str, &str) = ("[Class ", "]");
const DAMAGE_TYPE: (&str, &str) = ("with damage type '", "'");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line does not contain the death marker")]
    NotADeathRecord,

    #[error("line has no bracketed timestamp")]
    MissingTimestamp,

    #[error("invalid timestamp '{text}': {source}")]
    InvalidTimestamp {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse one raw log line into a [`KillEvent`].
///
/// Lines without [`DEATH_MARKER`] are rejected. Missing fields become empty strings; only the
/// timestamp is mandatory.
pub fn parse_line(line: &str) -> Result<KillEvent, ParseError> {
    if !line.contains(DEATH_MARKER) {
        return Err(ParseError::NotADeathRecord);
    }

    let raw_timestamp = timestamp_text(line)?;
    let timestamp = parse_timestamp(raw_timestamp)?;

    Ok(KillEvent {
        id: EventId::from_timestamp_text(raw_timestamp),
        timestamp,
        killed_player: field(line, KILLED_PLAYER),
        killer: field(line, KILLER),
        weapon: field(line, WEAPON),
        weapon_class: field(line, WEAPON_CLASS),
        damage_type: field(line, DAMAGE_TYPE),
        zone: field(line, ZONE),
    })
}

/// Returns the substring between the first `start` and the next `end` after it, or an
/// empty string when either token is absent. Every field is searched from the start of the
/// line.
pub fn extract_value<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let Some(start_idx) = text.find(start) else {
        return "";
    };
    let value_start = start_idx + start.len();

    match text[value_start..].find(end) {
        Some(len) => &text[value_start..value_start + len],
        None => "",
    }
}

fn field(line: &str, (start, end): (&str, &str)) -> String {
    extract_value(line, start, end).to_owned()
}

/// The text between the first `<` and the first `>` of the line.
fn timestamp_text(line: &str) -> Result<&str, ParseError> {
    let open = line.find('<').ok_or(ParseError::MissingTimestamp)?;
    let close = line.find('>').ok_or(ParseError::MissingTimestamp)?;

    if close <= open {
        return Err(ParseError::MissingTimestamp);
    }

    Ok(&line[open + 1..close])
}

/// ISO-8601 date-time with an offset. Seconds may be omitted (`2025-02-12T14:38Z`).
fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_rfc3339(text).or_else(|source| {
        minute_precision(text).ok_or_else(|| ParseError::InvalidTimestamp {
            text: text.to_owned(),
            source,
        })
    })
}

fn minute_precision(text: &str) -> Option<DateTime<FixedOffset>> {
    let normalized = match text.strip_suffix(&['Z', 'z'][..]) {
        Some(rest) => format!("{rest}+00:00"),
        None => text.to_owned(),
    };
    DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z").ok()
}
