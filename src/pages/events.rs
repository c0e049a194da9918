use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::event_list::EventList;
use crate::events::Event;

#[derive(Properties, PartialEq)]
pub struct EventsPageProps {
    pub active: bool,
    /// The full fetched list; `None` while the fetch is in flight.
    pub events: Option<Vec<Event>>,
    pub on_contact: Callback<()>,
}

#[function_component(EventsPage)]
pub fn events_page(props: &EventsPageProps) -> Html {
    let contact = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_contact.emit(());
        })
    };

    html! {
        <section id="events" class={classes!("page", props.active.then(|| "active"))}>
            <div class="section-header fade-in">
                <h2>{"All Events"}</h2>
                <p>{"Everything on the calendar, from weekly services to special gatherings."}</p>
            </div>
            <EventList container_id="all-events" events={props.events.clone()} />
            <div class="events-cta scale-in">
                <p>{"Want to host your own event here?"}</p>
                <button class="cta-button" onclick={contact}>{"Contact Us"}</button>
            </div>
        </section>
    }
}
