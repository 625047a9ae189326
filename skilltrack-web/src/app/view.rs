use crate::app::handlers::Handlers;
use crate::app::state::Snapshot;
use crate::components::name_input::NameInput;
use crate::components::point_summaries::PointSummaries;
use crate::components::title_selector::TitleSelector;
use crate::components::track_detail::TrackDetail;
use crate::components::track_selector::TrackSelector;
use crate::dom;
use crate::input::key_to_mutation;
use gloo::events::{EventListener, EventListenerOptions};
use skilltrack_core::{Mutation, Track};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub snapshot: Snapshot,
    pub handlers: Handlers,
}

/// Route shortcut keys pressed anywhere on the page to `dispatch`.
#[hook]
fn use_window_keys(focused: Track, dispatch: Callback<Mutation>) {
    use_effect_with((focused, dispatch), |(focused, dispatch)| {
        let focused = *focused;
        let dispatch = dispatch.clone();
        let listener = dom::window().ok().map(|window| {
            EventListener::new_with_options(
                &window,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if typing_in_form(event) {
                        return;
                    }
                    if let Some(mutation) = key_to_mutation(&event.key(), focused) {
                        event.prevent_default();
                        dispatch.emit(mutation);
                    }
                },
            )
        });
        move || drop(listener)
    });
}

/// Typing in the form must not move focus or change milestones.
fn typing_in_form(event: &KeyboardEvent) -> bool {
    event.target().is_some_and(|target| {
        target.has_type::<HtmlInputElement>() || target.has_type::<HtmlSelectElement>()
    })
}

#[function_component(AssessmentView)]
pub fn assessment_view(p: &Props) -> Html {
    let state = &p.snapshot.state;
    let focused = state.focused_track;

    use_window_keys(focused, p.handlers.dispatch.clone());

    html! {
        <main id="main">
            <div class="assessment-header">
                <form onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <NameInput
                        value={AttrValue::from(state.name.clone())}
                        on_change={p.handlers.name_change.clone()}
                    />
                    <TitleSelector
                        titles={p.snapshot.titles.clone()}
                        current={AttrValue::from(state.title.clone())}
                        on_pick={p.handlers.title_pick.clone()}
                    />
                </form>
                <PointSummaries summary={p.snapshot.summary.clone()} />
            </div>
            <TrackSelector
                milestones={state.milestone_by_track}
                {focused}
                on_focus={p.handlers.focus_track.clone()}
            />
            <TrackDetail
                track={focused}
                milestone={state.focused_milestone()}
                on_change={p.handlers.milestone_change.clone()}
            />
            <p class="share-link muted">
                <a href={format!("#{}", p.snapshot.fragment)}>{ "Link to this assessment" }</a>
            </p>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::build_handlers;
    use futures::executor::block_on;
    use skilltrack_core::{MemoryFragmentStore, StateController, TitleCatalog};
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_snapshot_of_controller() {
        let controller = Rc::new(RefCell::new(StateController::load(
            MemoryFragmentStore::new(),
            TitleCatalog::bundled().clone(),
        )));
        let handlers = build_handlers(&controller, &Callback::noop());
        let snapshot = Snapshot::capture(&controller.borrow());
        let props = Props { snapshot, handlers };
        let html = block_on(LocalServerRenderer::<AssessmentView>::with_props(props).render());
        assert!(html.contains("Don Norman"));
        assert!(html.contains("UX Leadership"));
        assert!(html.contains("Don%20Norman"));
        assert!(html.contains("Lead Designer"));
    }
}
