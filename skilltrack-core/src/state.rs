use crate::milestone::{Milestone, coerce_field, coerce_optional};
use crate::track::{TRACK_COUNT, Track};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Milestone for every track. Total by construction: there is no way to
/// leave a track without a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MilestoneMap([Milestone; TRACK_COUNT]);

impl MilestoneMap {
    /// Every track at milestone 0.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self([Milestone::MIN; TRACK_COUNT])
    }

    /// Build a map by asking `f` for each track in canonical order.
    pub fn from_fn(mut f: impl FnMut(Track) -> Milestone) -> Self {
        let mut values = [Milestone::MIN; TRACK_COUNT];
        for track in Track::ALL {
            values[track.index()] = f(track);
        }
        Self(values)
    }

    #[must_use]
    pub const fn get(&self, track: Track) -> Milestone {
        self.0[track.index()]
    }

    pub const fn set(&mut self, track: Track, milestone: Milestone) {
        self.0[track.index()] = milestone;
    }

    /// Copy of this map with one track replaced.
    #[must_use]
    pub const fn with(mut self, track: Track, milestone: Milestone) -> Self {
        self.set(track, milestone);
        self
    }

    /// `(track, milestone)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Track, Milestone)> + '_ {
        Track::ALL.iter().map(|track| (*track, self.get(*track)))
    }

    /// Number of tracks above milestone 0.
    #[must_use]
    pub fn assessed_count(&self) -> usize {
        self.0.iter().filter(|m| **m > Milestone::MIN).count()
    }
}

impl Serialize for MilestoneMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(track, milestone)| (track.id(), milestone)))
    }
}

impl<'de> Deserialize<'de> for MilestoneMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut map = Self::zeroed();
        for (key, value) in raw {
            match key.parse::<Track>() {
                Ok(track) => map.set(track, coerce_value(&value)),
                Err(err) => log::warn!("ignoring milestone entry: {err}"),
            }
        }
        Ok(map)
    }
}

/// Numbers and numeric strings are coerced; `null` and anything else is 0.
fn coerce_value(value: &Value) -> Milestone {
    match value {
        Value::Number(number) => coerce_optional(number.as_f64()),
        Value::String(text) => coerce_field(Some(text.as_str())),
        _ => Milestone::MIN,
    }
}

/// The root entity of an assessment.
///
/// Values are replaced wholesale on every edit; see [`crate::navigation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentState {
    pub name: String,
    pub title: String,
    pub milestone_by_track: MilestoneMap,
    pub focused_track: Track,
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self::empty()
    }
}

impl AssessmentState {
    /// Blank name and title, every track at 0.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            milestone_by_track: MilestoneMap::zeroed(),
            focused_track: Track::DEFAULT_FOCUS,
        }
    }

    /// The sample assessment shown when no fragment is present.
    #[must_use]
    pub fn illustrative() -> Self {
        let spread = [
            (Track::UxLeadership, 1),
            (Track::UxStrategyPlanning, 2),
            (Track::UxWriting, 3),
            (Track::InformationArchitecture, 2),
            (Track::UserFlows, 4),
            (Track::CommunicationPresenting, 1),
            (Track::Prototyping, 1),
            (Track::Branding, 4),
            (Track::UiDesign, 3),
            (Track::InteractionDesign, 2),
            (Track::WorkshopFacilitation, 0),
            (Track::DesignThinking, 4),
            (Track::Agile, 2),
            (Track::Empathy, 2),
            (Track::QualitativeResearch, 3),
            (Track::QuantitativeResearch, 0),
        ];
        let mut milestones = MilestoneMap::zeroed();
        for (track, level) in spread {
            milestones.set(track, Milestone::new(level).unwrap_or_default());
        }
        Self {
            name: "Don Norman".to_string(),
            title: "Design Guru".to_string(),
            milestone_by_track: milestones,
            focused_track: Track::DEFAULT_FOCUS,
        }
    }

    /// Milestone of the currently focused track.
    #[must_use]
    pub const fn focused_milestone(&self) -> Milestone {
        self.milestone_by_track.get(self.focused_track)
    }
}
