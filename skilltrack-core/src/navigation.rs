//! Focus cycling and milestone edits.
//!
//! Every operation takes the current state by reference and returns the next
//! one; nothing here mutates in place.

use crate::milestone::Milestone;
use crate::state::AssessmentState;
use crate::titles::{NO_ELIGIBLE_TITLE, TitleResolver};
use crate::track::Track;
use serde::{Deserialize, Serialize};

/// Keep `current` if it is eligible, otherwise the first eligible title,
/// otherwise [`NO_ELIGIBLE_TITLE`].
#[must_use]
pub fn reselect_title(current: &str, eligible: &[String]) -> String {
    if eligible.iter().any(|title| title == current) {
        return current.to_string();
    }
    eligible
        .first()
        .cloned()
        .unwrap_or_else(|| NO_ELIGIBLE_TITLE.to_string())
}

/// Move focus `delta` tracks, wrapping around the fixed order.
#[must_use]
pub fn shift_focused_track(state: &AssessmentState, delta: i32) -> AssessmentState {
    AssessmentState {
        focused_track: state.focused_track.offset(delta),
        ..state.clone()
    }
}

#[must_use]
pub fn set_focused_track(state: &AssessmentState, track: Track) -> AssessmentState {
    AssessmentState {
        focused_track: track,
        ..state.clone()
    }
}

/// Focus a track by id. Unknown ids select the first track.
#[must_use]
pub fn set_focused_track_id(state: &AssessmentState, track_id: &str) -> AssessmentState {
    let track = track_id.parse::<Track>().unwrap_or_else(|err| {
        log::warn!("{err}; focusing {}", Track::ALL[0]);
        Track::ALL[0]
    });
    set_focused_track(state, track)
}

/// Set a track's milestone, focus it, and re-derive the title against the
/// updated milestones.
#[must_use]
pub fn set_track_milestone<R>(
    state: &AssessmentState,
    track: Track,
    milestone: Milestone,
    resolver: &R,
) -> AssessmentState
where
    R: TitleResolver + ?Sized,
{
    let milestone_by_track = state.milestone_by_track.with(track, milestone);
    let eligible = resolver.eligible_titles(&milestone_by_track);
    AssessmentState {
        name: state.name.clone(),
        title: reselect_title(&state.title, &eligible),
        milestone_by_track,
        focused_track: track,
    }
}

/// Nudge the focused track's milestone by `delta`, saturating at 0 and 5.
#[must_use]
pub fn shift_focused_milestone<R>(
    state: &AssessmentState,
    delta: i32,
    resolver: &R,
) -> AssessmentState
where
    R: TitleResolver + ?Sized,
{
    let next = state.focused_milestone().saturating_shift(delta);
    set_track_milestone(state, state.focused_track, next, resolver)
}

/// Explicit title pick, falling back like [`reselect_title`] when the
/// requested title is not eligible under the current milestones.
#[must_use]
pub fn set_title<R>(state: &AssessmentState, title: &str, resolver: &R) -> AssessmentState
where
    R: TitleResolver + ?Sized,
{
    let eligible = resolver.eligible_titles(&state.milestone_by_track);
    AssessmentState {
        title: reselect_title(title, &eligible),
        ..state.clone()
    }
}

#[must_use]
pub fn set_name(state: &AssessmentState, name: &str) -> AssessmentState {
    AssessmentState {
        name: name.to_string(),
        ..state.clone()
    }
}

/// A single user-driven edit, as dispatched by a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    NameChange { name: String },
    TitlePick { title: String },
    TrackMilestoneChange { track: Track, milestone: Milestone },
    FocusTrack { track: Track },
    ShiftFocus { delta: i32 },
    ShiftFocusedMilestone { delta: i32 },
}

impl Mutation {
    /// Produce the state that follows `state` under this edit.
    #[must_use]
    pub fn apply<R>(&self, state: &AssessmentState, resolver: &R) -> AssessmentState
    where
        R: TitleResolver + ?Sized,
    {
        match self {
            Self::NameChange { name } => set_name(state, name),
            Self::TitlePick { title } => set_title(state, title, resolver),
            Self::TrackMilestoneChange { track, milestone } => {
                set_track_milestone(state, *track, *milestone, resolver)
            }
            Self::FocusTrack { track } => set_focused_track(state, *track),
            Self::ShiftFocus { delta } => shift_focused_track(state, *delta),
            Self::ShiftFocusedMilestone { delta } => {
                shift_focused_milestone(state, *delta, resolver)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MilestoneMap;
    use crate::titles::TitleCatalog;

    fn ladder(milestones: &MilestoneMap) -> Vec<String> {
        let assessed = milestones.assessed_count();
        match assessed {
            0 => vec!["Novice".to_string()],
            1..=3 => vec!["Practitioner".to_string(), "Specialist".to_string()],
            _ => vec!["Expert".to_string()],
        }
    }

    fn nobody(_: &MilestoneMap) -> Vec<String> {
        Vec::new()
    }

    fn focused_at(index: usize) -> AssessmentState {
        set_focused_track(&AssessmentState::empty(), Track::ALL[index])
    }

    #[test]
    fn focus_wraps_around() {
        let last = Track::ALL.len() - 1;
        assert_eq!(
            shift_focused_track(&focused_at(0), -1).focused_track,
            Track::ALL[last]
        );
        assert_eq!(
            shift_focused_track(&focused_at(last), 1).focused_track,
            Track::ALL[0]
        );
        assert_eq!(
            shift_focused_track(&focused_at(2), 3).focused_track,
            Track::ALL[5]
        );
    }

    #[test]
    fn focus_shift_leaves_everything_else() {
        let state = AssessmentState::illustrative();
        let next = shift_focused_track(&state, 1);
        assert_eq!(next.milestone_by_track, state.milestone_by_track);
        assert_eq!(next.title, state.title);
        assert_eq!(next.name, state.name);
    }

    #[test]
    fn unknown_track_id_selects_first() {
        let next = set_focused_track_id(&focused_at(4), "NOPE");
        assert_eq!(next.focused_track, Track::ALL[0]);
        let next = set_focused_track_id(&focused_at(4), "ux_writing");
        assert_eq!(next.focused_track, Track::UxWriting);
    }

    #[test]
    fn milestone_shift_clamps() {
        let state = focused_at(7);
        let up = shift_focused_milestone(&state, 100, &ladder);
        assert_eq!(up.focused_milestone(), Milestone::MAX);
        let down = shift_focused_milestone(&up, -100, &ladder);
        assert_eq!(down.focused_milestone(), Milestone::MIN);
        let one = shift_focused_milestone(&state, 1, &ladder);
        assert_eq!(one.focused_milestone().get(), 1);
    }

    #[test]
    fn milestone_edit_moves_focus_and_reselects_title() {
        let mut state = AssessmentState::empty();
        state.title = "Novice".to_string();
        let next = set_track_milestone(&state, Track::Agile, Milestone::MAX, &ladder);
        assert_eq!(next.focused_track, Track::Agile);
        assert_eq!(next.title, "Practitioner");

        let picked = set_title(&next, "Specialist", &ladder);
        let again = set_track_milestone(&picked, Track::Empathy, Milestone::MAX, &ladder);
        assert_eq!(again.title, "Specialist");
    }

    #[test]
    fn empty_eligible_set_uses_sentinel() {
        let state = AssessmentState::illustrative();
        let next = set_track_milestone(&state, Track::Agile, Milestone::MAX, &nobody);
        assert_eq!(next.title, NO_ELIGIBLE_TITLE);
        assert_eq!(set_title(&state, "Anything", &nobody).title, NO_ELIGIBLE_TITLE);
    }

    #[test]
    fn title_pick_falls_back_to_first_eligible() {
        let catalog = TitleCatalog::bundled();
        let state = AssessmentState::illustrative();
        assert_eq!(set_title(&state, "Design Manager", catalog).title, "Design Manager");
        assert_eq!(set_title(&state, "Design Guru", catalog).title, "Lead Designer");
        assert_eq!(
            set_title(&state, "Design Guru", catalog).milestone_by_track,
            state.milestone_by_track
        );
    }

    #[test]
    fn mutations_dispatch_to_operations() {
        let catalog = TitleCatalog::bundled();
        let state = AssessmentState::empty();
        let renamed = Mutation::NameChange {
            name: "Ada".to_string(),
        }
        .apply(&state, catalog);
        assert_eq!(renamed.name, "Ada");

        let focused = Mutation::FocusTrack {
            track: Track::Branding,
        }
        .apply(&renamed, catalog);
        assert_eq!(focused.focused_track, Track::Branding);

        let bumped = Mutation::ShiftFocusedMilestone { delta: 2 }.apply(&focused, catalog);
        assert_eq!(bumped.milestone_by_track.get(Track::Branding).get(), 2);
        assert_eq!(bumped.title, "Junior Designer");

        let json = serde_json::to_string(&Mutation::ShiftFocus { delta: -1 }).unwrap();
        assert_eq!(json, r#"{"op":"shift_focus","delta":-1}"#);
    }
}
