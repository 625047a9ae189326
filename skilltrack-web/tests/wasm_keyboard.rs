#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use skilltrack_core::{MemoryFragmentStore, StateController, TitleCatalog, Track};
use skilltrack_web::app::view::Props;
use skilltrack_web::app::{AssessmentView, Snapshot, build_handlers};
use skilltrack_web::dom;
use wasm_bindgen_test::*;
use web_sys::{KeyboardEvent, KeyboardEventInit};
use yew::{Callback, Renderer};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root() -> web_sys::Element {
    let doc = dom::window()
        .expect("window")
        .document()
        .expect("document");
    let root = doc.create_element("div").expect("create root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event =
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event");
    dom::window()
        .expect("window")
        .dispatch_event(&event)
        .expect("dispatch keydown");
}

#[wasm_bindgen_test]
async fn window_keys_reach_controller_without_element_focus() {
    let controller = Rc::new(RefCell::new(StateController::load(
        MemoryFragmentStore::with_fragment("0"),
        TitleCatalog::bundled().clone(),
    )));
    let props = Props {
        snapshot: Snapshot::capture(&controller.borrow()),
        handlers: build_handlers(&controller, &Callback::noop()),
    };
    Renderer::<AssessmentView>::with_root_and_props(mount_root(), props).render();
    yew::platform::time::sleep(Duration::ZERO).await;

    press("ArrowRight");
    assert_eq!(controller.borrow().state().focused_track, Track::ALL[0]);

    press("ArrowUp");
    assert_eq!(
        controller
            .borrow()
            .state()
            .milestone_by_track
            .get(Track::ALL[0])
            .get(),
        1
    );
}
