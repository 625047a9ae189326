use skilltrack_core::{Milestone, Track};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub track: Track,
    pub milestone: Milestone,
    pub on_change: Callback<(Track, Milestone)>,
}

fn milestone_label(milestone: Milestone) -> String {
    if milestone == Milestone::MIN {
        "Not assessed".to_string()
    } else {
        format!("Milestone {milestone}")
    }
}

/// Focused track with a picker for its milestone.
#[function_component(TrackDetail)]
pub fn track_detail(p: &Props) -> Html {
    let track = p.track;
    html! {
        <section class="track-detail" aria-labelledby="track-detail-heading">
            <h2 id="track-detail-heading">{ track.display_name() }</h2>
            <p class="muted">{ format!("Category: {}", track.category().label()) }</p>
            <ol class="track-detail__milestones" role="radiogroup">
                { for Milestone::ALL.iter().map(|milestone| {
                    let milestone = *milestone;
                    let checked = milestone == p.milestone;
                    let onclick = {
                        let cb = p.on_change.clone();
                        Callback::from(move |_: MouseEvent| cb.emit((track, milestone)))
                    };
                    html! {
                        <li key={milestone.get()}>
                            <button
                                role="radio"
                                class={classes!("milestone", checked.then_some("milestone--current"))}
                                aria-checked={if checked { "true" } else { "false" }}
                                {onclick}
                            >
                                { milestone_label(milestone) }
                            </button>
                        </li>
                    }
                }) }
            </ol>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_all_levels_with_current_checked() {
        let props = Props {
            track: Track::UxWriting,
            milestone: Milestone::new(3).unwrap(),
            on_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TrackDetail>::with_props(props).render());
        assert!(html.contains("UX Writing"));
        assert!(html.contains("Not assessed"));
        assert!(html.contains("Milestone 5"));
        assert_eq!(html.matches("milestone--current").count(), 1);
    }
}
