//! Edit scripts: one short op per argument, applied left to right.
//!
//! ```text
//! name=Ada  title=Designer  focus=UX_WRITING  next  prev  up  down
//! set=AGILE:4  shift=-2  bump=3
//! ```

use skilltrack_core::{Milestone, Mutation, Track, UnknownTrack};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown edit op '{0}'")]
    UnknownOp(String),
    #[error("edit op '{op}' needs a value")]
    MissingValue { op: String },
    #[error(transparent)]
    Track(#[from] UnknownTrack),
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("milestone {0} is outside 0-5")]
    MilestoneRange(i64),
    #[error("'{0}' should look like TRACK:LEVEL")]
    MalformedSet(String),
}

/// Parse a single op into the mutation a host would dispatch for it.
///
/// # Errors
///
/// Returns an error for unknown ops, unknown tracks, and malformed numbers.
pub fn parse_op(raw: &str) -> Result<Mutation, ScriptError> {
    let (op, value) = match raw.split_once('=') {
        Some((op, value)) => (op.trim(), Some(value)),
        None => (raw.trim(), None),
    };
    match op {
        "name" => Ok(Mutation::NameChange {
            name: required(op, value)?.to_string(),
        }),
        "title" => Ok(Mutation::TitlePick {
            title: required(op, value)?.to_string(),
        }),
        "focus" => Ok(Mutation::FocusTrack {
            track: required(op, value)?.trim().parse()?,
        }),
        "next" => Ok(Mutation::ShiftFocus { delta: 1 }),
        "prev" => Ok(Mutation::ShiftFocus { delta: -1 }),
        "up" => Ok(Mutation::ShiftFocusedMilestone { delta: 1 }),
        "down" => Ok(Mutation::ShiftFocusedMilestone { delta: -1 }),
        "shift" => Ok(Mutation::ShiftFocus {
            delta: parse_delta(required(op, value)?)?,
        }),
        "bump" => Ok(Mutation::ShiftFocusedMilestone {
            delta: parse_delta(required(op, value)?)?,
        }),
        "set" => parse_set(required(op, value)?),
        _ => Err(ScriptError::UnknownOp(raw.to_string())),
    }
}

/// Parse every op, stopping at the first bad one.
///
/// # Errors
///
/// Returns the first op that fails to parse.
pub fn parse_script<S: AsRef<str>>(ops: &[S]) -> Result<Vec<Mutation>, ScriptError> {
    ops.iter().map(|op| parse_op(op.as_ref())).collect()
}

fn required<'a>(op: &str, value: Option<&'a str>) -> Result<&'a str, ScriptError> {
    value.ok_or_else(|| ScriptError::MissingValue { op: op.to_string() })
}

fn parse_delta(raw: &str) -> Result<i32, ScriptError> {
    raw.trim()
        .parse()
        .map_err(|_| ScriptError::NotANumber(raw.to_string()))
}

fn parse_set(value: &str) -> Result<Mutation, ScriptError> {
    let (track, level) = value
        .split_once(':')
        .ok_or_else(|| ScriptError::MalformedSet(value.to_string()))?;
    let track: Track = track.trim().parse()?;
    let level: i64 = level
        .trim()
        .parse()
        .map_err(|_| ScriptError::NotANumber(level.to_string()))?;
    let milestone = u8::try_from(level)
        .ok()
        .and_then(Milestone::new)
        .ok_or(ScriptError::MilestoneRange(level))?;
    Ok(Mutation::TrackMilestoneChange { track, milestone })
}
