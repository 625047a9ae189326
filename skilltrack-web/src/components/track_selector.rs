use skilltrack_core::{MilestoneMap, Track};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub milestones: MilestoneMap,
    pub focused: Track,
    pub on_focus: Callback<Track>,
}

/// One button per track, in canonical order, showing its milestone.
#[function_component(TrackSelector)]
pub fn track_selector(p: &Props) -> Html {
    html! {
        <nav class="track-selector" aria-label="Tracks">
            <ul role="list">
                { for Track::ALL.iter().map(|track| {
                    let track = *track;
                    let focused = track == p.focused;
                    let onclick = {
                        let cb = p.on_focus.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(track))
                    };
                    let class = classes!(
                        "track-selector__item",
                        focused.then_some("track-selector__item--focused"),
                        format!("category-{:?}", track.category()).to_lowercase()
                    );
                    html! {
                        <li key={track.id()}>
                            <button
                                {class}
                                data-track={track.id()}
                                aria-pressed={if focused { "true" } else { "false" }}
                                {onclick}
                            >
                                <span class="track-selector__name">{ track.display_name() }</span>
                                <span class="track-selector__level">{ p.milestones.get(track).get() }</span>
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}
