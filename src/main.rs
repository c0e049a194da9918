use gloo_console::error;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

mod config;
mod events;
mod reveal;

mod components {
    pub mod banner;
    pub mod event_list;
    pub mod particles;
    pub mod preloader;
}
mod forms {
    pub mod inquiry;
    pub mod rental;
}
mod pages {
    pub mod events;
    pub mod home;
    pub mod rental;
}

use components::banner::{BannerMessage, StatusBanner, DISMISS_AFTER_MS};
use components::particles::ParticleField;
use components::preloader::Preloader;
use events::{events_or_default, highlights, Event};
use pages::events::EventsPage;
use pages::home::Home;
use pages::rental::RentalPage;

const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
const NAVBAR_BREAKPOINT: f64 = 768.0;
const CONTACT_SCROLL_DELAY_MS: u32 = 500;
const RE_OBSERVE_DELAY_MS: u32 = 100;

/// The one logical page shown at a time. Navigation is a plain state switch;
/// there is no history or routing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    Events,
    Rental,
}

fn scroll_to_top() {
    if let Some(window) = window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn scroll_to_contact_section() {
    if let Some(section) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("contact-section"))
    {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
    pub on_contact: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let handler = Closure::wrap(Box::new(move || {
                    let scrolled = web_sys::window()
                        .map(|w| {
                            let width =
                                w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                            let y = w.scroll_y().unwrap_or(0.0);
                            // Only the desktop navbar collapses on scroll
                            width > NAVBAR_BREAKPOINT && y > NAVBAR_SCROLL_THRESHOLD
                        })
                        .unwrap_or(false);
                    is_scrolled.set(scrolled);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            handler.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            handler.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let nav_to = {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        move |target: Page| {
            let on_navigate = on_navigate.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                on_navigate.emit(target);
            })
        }
    };

    let contact = {
        let on_contact = props.on_contact.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_contact.emit(());
        })
    };

    let link_class = |target: Page| {
        classes!("nav-link", (props.current == target).then(|| "current"))
    };

    html! {
        <>
            <nav id="navbar" class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#" class="nav-logo" onclick={nav_to(Page::Home)}>
                        {"Gracepoint Fellowship"}
                    </a>

                    <button
                        class={classes!("hamburger", (*menu_open).then(|| "active"))}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>

                    <div class={classes!("sidebar", (*menu_open).then(|| "active"))}>
                        <div class="nav-links">
                            <a href="#" class={link_class(Page::Home)} onclick={nav_to(Page::Home)}>
                                {"Home"}
                            </a>
                            <a href="#" class={link_class(Page::Events)} onclick={nav_to(Page::Events)}>
                                {"Events"}
                            </a>
                            <a href="#" class={link_class(Page::Rental)} onclick={nav_to(Page::Rental)}>
                                {"Space Rental"}
                            </a>
                            <a href="#" class="nav-link" onclick={contact}>
                                {"Contact"}
                            </a>
                        </div>
                    </div>
                </div>
            </nav>
            <div
                id="sidebar-overlay"
                class={classes!("sidebar-overlay", (*menu_open).then(|| "active"))}
                onclick={close_menu}
            ></div>
        </>
    }
}

#[function_component]
fn App() -> Html {
    let page = use_state(|| Page::Home);
    let ready = use_state(|| false);
    let events = use_state(|| None::<Vec<Event>>);
    let banner = use_state(|| None::<BannerMessage>);

    // Load events once on mount, falling back to the defaults on any failure.
    {
        let events = events.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let fetched = match Request::get(&format!(
                        "{}/api/events",
                        config::get_backend_url()
                    ))
                    .send()
                    .await
                    {
                        Ok(response) if response.ok() => {
                            match response.json::<Vec<Event>>().await {
                                Ok(list) => Some(list),
                                Err(e) => {
                                    error!(format!("Error decoding events: {}", e));
                                    None
                                }
                            }
                        }
                        Ok(response) => {
                            error!(format!(
                                "Error loading events: status {}",
                                response.status()
                            ));
                            None
                        }
                        Err(e) => {
                            error!(format!("Error loading events: {}", e));
                            None
                        }
                    };
                    events.set(Some(events_or_default(fetched)));
                });
                || ()
            },
            (),
        );
    }

    // Raised banners dismiss themselves
    {
        let banner = banner.clone();
        let deps = (*banner).clone();
        use_effect_with_deps(
            move |message: &Option<BannerMessage>| {
                let timeout = message.is_some().then(|| {
                    let banner = banner.clone();
                    Timeout::new(DISMISS_AFTER_MS, move || banner.set(None))
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    // Animation init once the preloader reports completion
    {
        use_effect_with_deps(
            move |ready: &bool| {
                if *ready {
                    reveal::observe_reveals();
                    reveal::stagger_initial_fade_ins();
                }
                || ()
            },
            *ready,
        );
    }

    // Freshly rendered event cards need observing too
    {
        use_effect_with_deps(
            move |loaded: &bool| {
                let timeout =
                    loaded.then(|| Timeout::new(RE_OBSERVE_DELAY_MS, reveal::observe_reveals));
                move || drop(timeout)
            },
            events.is_some(),
        );
    }

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| {
            info!("Showing {:?} page", target);
            page.set(target);
            scroll_to_top();
        })
    };

    let on_contact = {
        let page = page.clone();
        Callback::from(move |_: ()| {
            page.set(Page::Home);
            Timeout::new(CONTACT_SCROLL_DELAY_MS, scroll_to_contact_section).forget();
        })
    };

    let on_preloader_complete = {
        let ready = ready.clone();
        Callback::from(move |_| ready.set(true))
    };

    let notify = {
        let banner = banner.clone();
        Callback::from(move |message: BannerMessage| banner.set(Some(message)))
    };

    let all_events = (*events).clone();
    let highlight = all_events.as_ref().map(|list| highlights(list).to_vec());

    html! {
        <>
            <Preloader on_complete={on_preloader_complete} />
            if *ready {
                <ParticleField />
            }
            <Nav current={*page} on_navigate={on_navigate.clone()} on_contact={on_contact.clone()} />
            <StatusBanner message={(*banner).clone()} />
            <main>
                <Home
                    active={*page == Page::Home}
                    events={highlight}
                    on_navigate={on_navigate.clone()}
                    on_contact={on_contact.clone()}
                    notify={notify.clone()}
                />
                <EventsPage
                    active={*page == Page::Events}
                    events={all_events}
                    on_contact={on_contact.clone()}
                />
                <RentalPage active={*page == Page::Rental} notify={notify} />
            </main>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
