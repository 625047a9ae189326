use skilltrack_core::NO_ELIGIBLE_TITLE;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Titles eligible under the current milestones, in rule order.
    pub titles: Vec<String>,
    pub current: AttrValue,
    pub on_pick: Callback<String>,
}

#[function_component(TitleSelector)]
pub fn title_selector(p: &Props) -> Html {
    let onchange = {
        let cb = p.on_pick.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };

    if p.titles.is_empty() {
        return html! {
            <p class="title-selector title-selector--empty muted">{ "No eligible title" }</p>
        };
    }

    // A stale title is shown but cannot be re-picked.
    let stale = (p.current.as_str() != NO_ELIGIBLE_TITLE
        && !p.titles.iter().any(|t| t.as_str() == p.current.as_str()))
    .then(|| p.current.clone());

    html! {
        <select class="title-selector" aria-label="Title" {onchange}>
            if let Some(label) = stale {
                <option value={label.clone()} selected={true} disabled={true}>{ label }</option>
            }
            { for p.titles.iter().map(|title| html! {
                <option value={title.clone()} selected={title.as_str() == p.current.as_str()}>{ title.clone() }</option>
            }) }
        </select>
    }
}
