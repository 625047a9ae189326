#[cfg(target_arch = "wasm32")]
use crate::store::LocationHashStore;
#[cfg(target_arch = "wasm32")]
use skilltrack_core::{StateController, TitleCatalog};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod handlers;
pub mod state;
pub mod view;

pub use handlers::{Handlers, build_handlers};
pub use state::{SharedController, Snapshot};
pub use view::AssessmentView;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let controller = use_mut_ref(|| {
        StateController::load(LocationHashStore, TitleCatalog::bundled().clone())
    });
    let force_update = use_force_update();
    let redraw = Callback::from(move |()| force_update.force_update());

    let handlers = build_handlers(&controller, &redraw);
    let snapshot = Snapshot::capture(&controller.borrow());

    html! {
        <AssessmentView {snapshot} {handlers} />
    }
}
