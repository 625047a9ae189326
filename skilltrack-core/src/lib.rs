//! Skilltrack Core
//!
//! Platform-agnostic assessment model for Skilltrack: the fixed set of skill
//! tracks, milestone coercion, the URL fragment codec, focus and milestone
//! navigation, and the controller that keeps a durable fragment in sync.
//! Hosts (browser, CLI) supply a [`FragmentStore`] and a [`TitleResolver`].

pub mod codec;
pub mod controller;
pub mod milestone;
pub mod navigation;
pub mod state;
pub mod store;
pub mod titles;
pub mod track;

// Re-export commonly used types
pub use codec::{
    FIELD_COUNT, FIELD_SEPARATOR, FragmentReport, Repair, TextField, decode, encode,
    encode_optional, inspect,
};
pub use controller::StateController;
pub use milestone::{Milestone, coerce_field, coerce_milestone, coerce_optional};
pub use navigation::{
    Mutation, reselect_title, set_focused_track, set_focused_track_id, set_name, set_title,
    set_track_milestone, shift_focused_milestone, shift_focused_track,
};
pub use state::{AssessmentState, MilestoneMap};
pub use store::{FragmentStore, MemoryFragmentStore};
pub use titles::{
    CatalogError, NO_ELIGIBLE_TITLE, PointSummary, TitleCatalog, TitleResolver, TitleRule,
};
pub use track::{Category, TRACK_COUNT, Track, UnknownTrack};
