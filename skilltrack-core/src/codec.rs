//! URL fragment codec.
//!
//! Fragment format: `m0,m1,...,m17,name,title` where each `m` is a single
//! digit in fixed track order and `name`/`title` are percent-escaped.
//! Decoding never fails on non-empty input; it repairs field by field.
//! Focus is not part of the format, so a round trip restores everything
//! except the focused track.

use crate::milestone::{Milestone, coerce_field};
use crate::state::{AssessmentState, MilestoneMap};
use crate::track::{TRACK_COUNT, Track};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::Serialize;

pub const FIELD_SEPARATOR: char = ',';
pub const NAME_FIELD: usize = TRACK_COUNT;
pub const TITLE_FIELD: usize = TRACK_COUNT + 1;
/// Fields in an encoded fragment: one per track plus name and title.
pub const FIELD_COUNT: usize = TRACK_COUNT + 2;

/// Bytes escaped in free-text fields. Includes the separator so text can
/// never split into extra fields.
const TEXT_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b',')
    .add(b'<')
    .add(b'>')
    .add(b'`');

fn escape_text(text: &str) -> String {
    utf8_percent_encode(text, TEXT_ESCAPES).to_string()
}

fn unescape_text(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

/// Strip a leading `#` and surrounding whitespace. `None` when nothing is left.
fn fragment_body(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
    (!body.is_empty()).then_some(body)
}

/// Encode a state into its fragment. Deterministic and always
/// [`FIELD_COUNT`] fields long.
#[must_use]
pub fn encode(state: &AssessmentState) -> String {
    let mut out = String::with_capacity(FIELD_COUNT * 2 + state.name.len() + state.title.len());
    for (_, milestone) in state.milestone_by_track.iter() {
        out.push_str(&milestone.to_string());
        out.push(FIELD_SEPARATOR);
    }
    out.push_str(&escape_text(&state.name));
    out.push(FIELD_SEPARATOR);
    out.push_str(&escape_text(&state.title));
    out
}

/// Encode an optional state; an absent state encodes to nothing.
#[must_use]
pub fn encode_optional(state: Option<&AssessmentState>) -> Option<String> {
    state.map(encode)
}

/// Decode a fragment, with or without its leading `#`.
///
/// Returns `None` only for empty input. Missing or invalid milestone fields
/// become 0; missing name/title fields stay empty. Focus is not persisted
/// and comes back as [`Track::DEFAULT_FOCUS`], so `decode(&encode(s)) ==
/// Some(s)` holds only when `s.focused_track` is that default.
#[must_use]
pub fn decode(raw: &str) -> Option<AssessmentState> {
    let body = fragment_body(raw)?;
    let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();

    let mut state = AssessmentState::empty();
    state.milestone_by_track =
        MilestoneMap::from_fn(|track| coerce_field(fields.get(track.index()).copied()));
    if let Some(name) = fields.get(NAME_FIELD) {
        state.name = unescape_text(name);
    }
    if let Some(title) = fields.get(TITLE_FIELD) {
        state.title = unescape_text(title);
    }
    Some(state)
}

/// Which free-text field a repair applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    Title,
}

/// One correction applied while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Repair {
    /// Milestone slot was not a single digit `0`-`5`.
    Milestone {
        track: Track,
        raw: Option<String>,
        value: Milestone,
    },
    /// Name or title slot was absent.
    MissingText { field: TextField },
    /// Name or title was not in canonical escaped form.
    Unescaped { field: TextField, raw: String },
    /// Fields after the title were dropped.
    ExtraFields { count: usize },
}

/// Field-by-field account of how a fragment decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentReport {
    pub field_count: usize,
    pub repairs: Vec<Repair>,
}

impl FragmentReport {
    /// True when re-encoding the decoded state reproduces the input exactly.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.repairs.is_empty()
    }
}

fn is_canonical_digit(field: &str) -> bool {
    matches!(field.as_bytes(), [b'0'..=b'5'])
}

/// Describe every repair [`decode`] would make. `None` for empty input.
#[must_use]
pub fn inspect(raw: &str) -> Option<FragmentReport> {
    let body = fragment_body(raw)?;
    let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();
    let mut repairs = Vec::new();

    for track in Track::ALL {
        let field = fields.get(track.index()).copied();
        if !field.is_some_and(is_canonical_digit) {
            repairs.push(Repair::Milestone {
                track,
                raw: field.map(str::to_string),
                value: coerce_field(field),
            });
        }
    }

    for (position, field) in [(NAME_FIELD, TextField::Name), (TITLE_FIELD, TextField::Title)] {
        match fields.get(position) {
            None => repairs.push(Repair::MissingText { field }),
            Some(raw) if escape_text(&unescape_text(raw)) != *raw => {
                repairs.push(Repair::Unescaped {
                    field,
                    raw: (*raw).to_string(),
                });
            }
            Some(_) => {}
        }
    }

    if fields.len() > FIELD_COUNT {
        repairs.push(Repair::ExtraFields {
            count: fields.len() - FIELD_COUNT,
        });
    }

    Some(FragmentReport {
        field_count: fields.len(),
        repairs,
    })
}
