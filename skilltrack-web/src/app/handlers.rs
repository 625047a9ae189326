use crate::app::state::SharedController;
use skilltrack_core::{FragmentStore, Milestone, Mutation, Track};
use yew::prelude::*;

/// Callbacks handed to the view; each forwards to a controller entry point
/// and then asks the host to redraw.
#[derive(Clone, PartialEq)]
pub struct Handlers {
    pub name_change: Callback<String>,
    pub title_pick: Callback<String>,
    pub milestone_change: Callback<(Track, Milestone)>,
    pub focus_track: Callback<Track>,
    pub dispatch: Callback<Mutation>,
}

pub fn build_name_change<S>(controller: &SharedController<S>, redraw: &Callback<()>) -> Callback<String>
where
    S: FragmentStore + 'static,
{
    let controller = controller.clone();
    let redraw = redraw.clone();
    Callback::from(move |text: String| {
        controller.borrow_mut().on_name_change(&text);
        redraw.emit(());
    })
}

pub fn build_title_pick<S>(controller: &SharedController<S>, redraw: &Callback<()>) -> Callback<String>
where
    S: FragmentStore + 'static,
{
    let controller = controller.clone();
    let redraw = redraw.clone();
    Callback::from(move |title: String| {
        controller.borrow_mut().on_title_pick(&title);
        redraw.emit(());
    })
}

pub fn build_milestone_change<S>(
    controller: &SharedController<S>,
    redraw: &Callback<()>,
) -> Callback<(Track, Milestone)>
where
    S: FragmentStore + 'static,
{
    let controller = controller.clone();
    let redraw = redraw.clone();
    Callback::from(move |(track, milestone): (Track, Milestone)| {
        controller
            .borrow_mut()
            .on_track_milestone_change(track, milestone);
        redraw.emit(());
    })
}

pub fn build_focus_track<S>(controller: &SharedController<S>, redraw: &Callback<()>) -> Callback<Track>
where
    S: FragmentStore + 'static,
{
    let controller = controller.clone();
    let redraw = redraw.clone();
    Callback::from(move |track: Track| {
        controller.borrow_mut().on_focus_track(track);
        redraw.emit(());
    })
}

pub fn build_dispatch<S>(controller: &SharedController<S>, redraw: &Callback<()>) -> Callback<Mutation>
where
    S: FragmentStore + 'static,
{
    let controller = controller.clone();
    let redraw = redraw.clone();
    Callback::from(move |mutation: Mutation| {
        controller.borrow_mut().dispatch(&mutation);
        redraw.emit(());
    })
}

pub fn build_handlers<S>(controller: &SharedController<S>, redraw: &Callback<()>) -> Handlers
where
    S: FragmentStore + 'static,
{
    Handlers {
        name_change: build_name_change(controller, redraw),
        title_pick: build_title_pick(controller, redraw),
        milestone_change: build_milestone_change(controller, redraw),
        focus_track: build_focus_track(controller, redraw),
        dispatch: build_dispatch(controller, redraw),
    }
}
