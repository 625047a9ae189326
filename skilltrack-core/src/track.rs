//! The fixed, ordered set of skill tracks.
//!
//! `Track::ALL` is the only canonical ordering in the crate. The fragment
//! codec encodes milestones positionally against it, so reordering variants
//! changes the meaning of every shared link.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of tracks in an assessment.
pub const TRACK_COUNT: usize = 18;

/// A skill area scored on the milestone scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Track {
    UxStrategyPlanning,
    UxWriting,
    InformationArchitecture,
    UserFlows,
    CommunicationPresenting,
    Prototyping,
    Branding,
    UiDesign,
    InteractionDesign,
    WorkshopFacilitation,
    DesignThinking,
    Agile,
    Empathy,
    QualitativeResearch,
    QuantitativeResearch,
    Analysis,
    UxAudits,
    UxLeadership,
}

/// Grouping used by point summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
    D,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Strategy",
            Self::B => "Craft",
            Self::C => "Research",
            Self::D => "Collaboration",
        }
    }
}

impl Track {
    /// Canonical presentation and encoding order.
    pub const ALL: [Self; TRACK_COUNT] = [
        Self::UxStrategyPlanning,
        Self::UxWriting,
        Self::InformationArchitecture,
        Self::UserFlows,
        Self::CommunicationPresenting,
        Self::Prototyping,
        Self::Branding,
        Self::UiDesign,
        Self::InteractionDesign,
        Self::WorkshopFacilitation,
        Self::DesignThinking,
        Self::Agile,
        Self::Empathy,
        Self::QualitativeResearch,
        Self::QuantitativeResearch,
        Self::Analysis,
        Self::UxAudits,
        Self::UxLeadership,
    ];

    /// Track focused in a freshly constructed state.
    pub const DEFAULT_FOCUS: Self = Self::UxLeadership;

    /// Position of this track in [`Track::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a track by position, `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable identifier used in JSON and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::UxStrategyPlanning => "UX_STRATEGY_PLANNING",
            Self::UxWriting => "UX_WRITING",
            Self::InformationArchitecture => "INFORMATION_ARCHITECTURE",
            Self::UserFlows => "USER_FLOWS",
            Self::CommunicationPresenting => "COMMUNICATION_PRESENTING",
            Self::Prototyping => "PROTOTYPING",
            Self::Branding => "BRANDING",
            Self::UiDesign => "UI_DESIGN",
            Self::InteractionDesign => "INTERACTION_DESIGN",
            Self::WorkshopFacilitation => "WORKSHOP_FACILITATION",
            Self::DesignThinking => "DESIGN_THINKING",
            Self::Agile => "AGILE",
            Self::Empathy => "EMPATHY",
            Self::QualitativeResearch => "QUALITATIVE_RESEARCH",
            Self::QuantitativeResearch => "QUANTITATIVE_RESEARCH",
            Self::Analysis => "ANALYSIS",
            Self::UxAudits => "UX_AUDITS",
            Self::UxLeadership => "UX_LEADERSHIP",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::UxStrategyPlanning => "UX Strategy & Planning",
            Self::UxWriting => "UX Writing",
            Self::InformationArchitecture => "Information Architecture",
            Self::UserFlows => "User Flows",
            Self::CommunicationPresenting => "Communication & Presenting",
            Self::Prototyping => "Prototyping",
            Self::Branding => "Branding",
            Self::UiDesign => "UI Design",
            Self::InteractionDesign => "Interaction Design",
            Self::WorkshopFacilitation => "Workshop Facilitation",
            Self::DesignThinking => "Design Thinking",
            Self::Agile => "Agile",
            Self::Empathy => "Empathy",
            Self::QualitativeResearch => "Qualitative Research",
            Self::QuantitativeResearch => "Quantitative Research",
            Self::Analysis => "Analysis",
            Self::UxAudits => "UX Audits",
            Self::UxLeadership => "UX Leadership",
        }
    }

    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::UxStrategyPlanning | Self::DesignThinking | Self::UxLeadership => Category::A,
            Self::UxWriting
            | Self::InformationArchitecture
            | Self::UserFlows
            | Self::Prototyping
            | Self::Branding
            | Self::UiDesign
            | Self::InteractionDesign => Category::B,
            Self::Empathy
            | Self::QualitativeResearch
            | Self::QuantitativeResearch
            | Self::Analysis
            | Self::UxAudits => Category::C,
            Self::CommunicationPresenting | Self::WorkshopFacilitation | Self::Agile => {
                Category::D
            }
        }
    }

    /// Track `delta` positions away, wrapping in both directions.
    #[must_use]
    pub fn offset(self, delta: i32) -> Self {
        let len = i64::try_from(TRACK_COUNT).unwrap_or(i64::MAX);
        let index = i64::try_from(self.index()).unwrap_or(0);
        let wrapped = (index + i64::from(delta)).rem_euclid(len);
        usize::try_from(wrapped)
            .ok()
            .and_then(Self::from_index)
            .unwrap_or(Self::ALL[0])
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown track id: {0}")]
pub struct UnknownTrack(pub String);

impl FromStr for Track {
    type Err = UnknownTrack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|track| track.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownTrack(needle.to_string()))
    }
}
