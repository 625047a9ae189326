use crate::codec;
use crate::milestone::Milestone;
use crate::navigation::{self, Mutation};
use crate::state::AssessmentState;
use crate::store::FragmentStore;
use crate::titles::TitleResolver;
use crate::track::Track;

/// Sole owner of the current assessment.
///
/// Loads from the store once, then re-encodes and publishes after every
/// entry point. Publishing is fire-and-forget: failures are logged and the
/// in-memory state still advances.
#[derive(Debug)]
pub struct StateController<S, R>
where
    S: FragmentStore,
    R: TitleResolver,
{
    state: AssessmentState,
    store: S,
    resolver: R,
}

impl<S, R> StateController<S, R>
where
    S: FragmentStore,
    R: TitleResolver,
{
    /// Adopt the stored fragment, or the illustrative default when it is
    /// absent or empty, and publish the adopted state.
    pub fn load(store: S, resolver: R) -> Self {
        let state = match store.read() {
            Some(raw) => {
                if let Some(report) = codec::inspect(&raw)
                    && !report.is_canonical()
                {
                    log::warn!(
                        "repaired {} field(s) in stored fragment",
                        report.repairs.len()
                    );
                }
                codec::decode(&raw).unwrap_or_else(AssessmentState::illustrative)
            }
            None => {
                log::debug!("no stored fragment, using illustrative default");
                AssessmentState::illustrative()
            }
        };
        let mut controller = Self {
            state,
            store,
            resolver,
        };
        controller.publish();
        controller
    }

    fn publish(&mut self) {
        let fragment = codec::encode(&self.state);
        log::debug!("publishing fragment {fragment}");
        if let Err(err) = self.store.publish(&fragment) {
            log::warn!("failed to publish fragment: {err}");
        }
    }

    fn replace(&mut self, next: AssessmentState) {
        self.state = next;
        self.publish();
    }

    /// Apply any mutation and publish the result.
    pub fn dispatch(&mut self, mutation: &Mutation) {
        let next = mutation.apply(&self.state, &self.resolver);
        self.replace(next);
    }

    pub fn on_name_change(&mut self, text: &str) {
        let next = navigation::set_name(&self.state, text);
        self.replace(next);
    }

    pub fn on_title_pick(&mut self, title: &str) {
        let next = navigation::set_title(&self.state, title, &self.resolver);
        self.replace(next);
    }

    pub fn on_track_milestone_change(&mut self, track: Track, milestone: Milestone) {
        let next = navigation::set_track_milestone(&self.state, track, milestone, &self.resolver);
        self.replace(next);
    }

    pub fn on_focus_track(&mut self, track: Track) {
        let next = navigation::set_focused_track(&self.state, track);
        self.replace(next);
    }

    /// Focus by string id, for hosts that only carry ids.
    pub fn on_focus_track_id(&mut self, track_id: &str) {
        let next = navigation::set_focused_track_id(&self.state, track_id);
        self.replace(next);
    }

    pub fn on_shift_focus(&mut self, delta: i32) {
        let next = navigation::shift_focused_track(&self.state, delta);
        self.replace(next);
    }

    pub fn on_shift_focused_milestone(&mut self, delta: i32) {
        let next = navigation::shift_focused_milestone(&self.state, delta, &self.resolver);
        self.replace(next);
    }

    #[must_use]
    pub const fn state(&self) -> &AssessmentState {
        &self.state
    }

    /// Encoded form of the current state.
    #[must_use]
    pub fn fragment(&self) -> String {
        codec::encode(&self.state)
    }

    /// Titles eligible under the current milestones.
    #[must_use]
    pub fn eligible_titles(&self) -> Vec<String> {
        self.resolver.eligible_titles(&self.state.milestone_by_track)
    }

    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_parts(self) -> (AssessmentState, S, R) {
        (self.state, self.store, self.resolver)
    }
}
