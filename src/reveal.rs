use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right, .scale-in";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const INITIAL_STAGGER_DELAY_MS: u32 = 1_000;
const INITIAL_STAGGER_STEP_MS: u32 = 100;

/// Adds `visible` to reveal elements as they enter the viewport. One-way:
/// the class is never removed again. Safe to call after inserting new cards;
/// re-observing an element just re-adds the class.
pub fn observe_reveals() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(_) => return,
        };

    if let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
    }

    // The observer watches for the rest of the page's life.
    callback.forget();
}

/// Gives `.fade-in` elements already above the fold a staggered head start,
/// one second after animation init.
pub fn stagger_initial_fade_ins() {
    Timeout::new(INITIAL_STAGGER_DELAY_MS, || {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };

        if let Ok(nodes) = document.query_selector_all(".fade-in") {
            for index in 0..nodes.length() {
                if let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok())
                {
                    Timeout::new(index * INITIAL_STAGGER_STEP_MS, move || {
                        let _ = element.class_list().add_1("visible");
                    })
                    .forget();
                }
            }
        }
    })
    .forget();
}
