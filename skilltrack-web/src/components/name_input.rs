use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(NameInput)]
pub fn name_input(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    html! {
        <input
            id="name"
            type="text"
            class="name-input"
            aria-label="Name"
            placeholder="Name"
            value={p.value.clone()}
            {oninput}
        />
    }
}
