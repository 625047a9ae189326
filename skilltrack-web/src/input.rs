use skilltrack_core::{Milestone, Mutation, Track};

/// Map a digit key to a milestone; only `0`-`5` are milestones.
#[must_use]
pub fn digit_key_to_milestone(key: &str) -> Option<Milestone> {
    match key {
        "0" | "1" | "2" | "3" | "4" | "5" => key.parse::<u8>().ok().and_then(Milestone::new),
        _ => None,
    }
}

/// Keyboard shortcut for a `KeyboardEvent.key` value.
///
/// Left/right move focus between tracks, up/down nudge the focused
/// milestone, digits set it directly.
#[must_use]
pub fn key_to_mutation(key: &str, focused: Track) -> Option<Mutation> {
    match key {
        "ArrowRight" => Some(Mutation::ShiftFocus { delta: 1 }),
        "ArrowLeft" => Some(Mutation::ShiftFocus { delta: -1 }),
        "ArrowUp" => Some(Mutation::ShiftFocusedMilestone { delta: 1 }),
        "ArrowDown" => Some(Mutation::ShiftFocusedMilestone { delta: -1 }),
        _ => digit_key_to_milestone(key).map(|milestone| Mutation::TrackMilestoneChange {
            track: focused,
            milestone,
        }),
    }
}
