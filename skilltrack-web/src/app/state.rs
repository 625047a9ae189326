use skilltrack_core::{AssessmentState, PointSummary, StateController, TitleCatalog};
use std::cell::RefCell;
use std::rc::Rc;

/// Controller shared between the app component and its callbacks.
pub type SharedController<S> = Rc<RefCell<StateController<S, TitleCatalog>>>;

/// Everything the view needs from the controller for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: AssessmentState,
    pub titles: Vec<String>,
    pub summary: PointSummary,
    pub fragment: String,
}

impl Snapshot {
    #[must_use]
    pub fn capture<S>(controller: &StateController<S, TitleCatalog>) -> Self
    where
        S: skilltrack_core::FragmentStore,
    {
        let state = controller.state().clone();
        let summary = controller.resolver().summarize(&state.milestone_by_track);
        Self {
            titles: controller.eligible_titles(),
            fragment: controller.fragment(),
            summary,
            state,
        }
    }
}
