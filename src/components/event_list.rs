use yew::prelude::*;

use crate::events::{format_event_date, image_src, Event};

#[derive(Properties, PartialEq)]
pub struct EventListProps {
    pub container_id: AttrValue,
    /// `None` while the fetch is still in flight.
    pub events: Option<Vec<Event>>,
}

#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    let cards = match &props.events {
        Some(events) => events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                let delay = format!("animation-delay: {:.1}s", index as f64 * 0.2);
                html! {
                    <div class={format!("event-card scale-in delay-{}", index + 1)} style={delay.clone()}>
                        <img src={image_src(event)} alt={event.title.clone()} loading="lazy" style={delay} />
                        <div class="event-content">
                            <div class="event-date">{ format_event_date(&event.event_date) }</div>
                            <h3 class="event-title">{ &event.title }</h3>
                            <p>{ &event.description }</p>
                        </div>
                    </div>
                }
            })
            .collect::<Html>(),
        None => html! {},
    };

    html! {
        <div id={props.container_id.clone()} class="events-grid">
            { cards }
        </div>
    }
}
