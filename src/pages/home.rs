use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::banner::BannerMessage;
use crate::components::event_list::EventList;
use crate::events::Event;
use crate::forms::inquiry::InquiryForm;
use crate::Page;

const PARALLAX_FACTOR: f64 = -0.5;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub active: bool,
    /// First three events only; `None` while the fetch is in flight.
    pub events: Option<Vec<Event>>,
    pub on_navigate: Callback<Page>,
    pub on_contact: Callback<()>,
    pub notify: Callback<BannerMessage>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let hero_offset = use_state(|| 0.0f64);

    // Parallax: the hero drifts up at half scroll speed.
    {
        let hero_offset = hero_offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let handler = Closure::wrap(Box::new(move || {
                    if let Some(w) = web_sys::window() {
                        let y = w.scroll_y().unwrap_or(0.0);
                        hero_offset.set(y * PARALLAX_FACTOR);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            handler.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let view_events = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Events);
        })
    };

    let plan_visit = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_contact.emit(());
        })
    };

    html! {
        <section id="home" class={classes!("page", props.active.then(|| "active"))}>
            <div class="hero" style={format!("transform: translateY({:.1}px)", *hero_offset)}>
                <h1 class="fade-in">{"Gracepoint Fellowship"}</h1>
                <p class="fade-in">
                    {"A place of worship, community, and celebration in the heart of the city."}
                </p>
                <div class="hero-actions">
                    <button class="cta-button" onclick={view_events}>{"Upcoming Events"}</button>
                    <button class="cta-button secondary" onclick={plan_visit}>{"Plan Your Visit"}</button>
                </div>
            </div>

            <div class="section-header slide-in-left">
                <h2>{"Upcoming Events"}</h2>
                <p>{"Join us for what's happening this season."}</p>
            </div>
            <EventList container_id="home-events" events={props.events.clone()} />

            <section id="contact-section" class="contact-section">
                <div class="section-header slide-in-right">
                    <h2>{"Get in Touch"}</h2>
                    <p>{"Questions about services, ministries, or visiting for the first time? Send us a note."}</p>
                </div>
                <InquiryForm notify={props.notify.clone()} />
            </section>
        </section>
    }
}
