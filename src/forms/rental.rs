use gloo_console::{error, log};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::banner::BannerMessage;
use crate::config;

const RESTORE_DELAY_MS: u32 = 2_000;
const CLEAR_STAGGER_MS: u32 = 30;

/// Checkbox values offered under "Additional needs".
const ADDITIONAL_NEEDS: &[(&str, &str)] = &[
    ("AV", "AV Equipment"),
    ("Catering", "Catering Kitchen"),
    ("Tables & Chairs", "Tables & Chairs"),
    ("Childcare", "Childcare Room"),
];

const EVENT_TYPES: &[&str] = &[
    "Wedding",
    "Conference",
    "Community Event",
    "Celebration",
    "Other",
];

const SPACES: &[&str] = &[
    "Main Sanctuary",
    "Fellowship Hall",
    "Youth Room",
    "Outdoor Grounds",
];

pub fn join_needs(needs: &[String]) -> String {
    needs.join(", ")
}

#[derive(Serialize)]
struct RentalPayload {
    name: String,
    phone: String,
    email: String,
    event_type: String,
    space_requested: String,
    event_date: String,
    start_time: String,
    end_time: String,
    guest_count: String,
    additional_needs: String,
    message: String,
}

#[derive(Properties, PartialEq)]
pub struct RentalFormProps {
    pub notify: Callback<BannerMessage>,
}

#[function_component(RentalForm)]
pub fn rental_form(props: &RentalFormProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let event_type = use_state(String::new);
    let space_requested = use_state(String::new);
    let event_date = use_state(String::new);
    let start_time = use_state(String::new);
    let end_time = use_state(String::new);
    let guest_count = use_state(String::new);
    let needs = use_state(Vec::<String>::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);

    let bind_input = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let bind_select = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            field.set(select.value());
        })
    };

    let bind_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let toggle_need = {
        let needs = needs.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut selected = (*needs).clone();
            if input.checked() {
                if !selected.contains(&input.value()) {
                    selected.push(input.value());
                }
            } else {
                selected.retain(|v| *v != input.value());
            }
            needs.set(selected);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let event_type = event_type.clone();
        let space_requested = space_requested.clone();
        let event_date = event_date.clone();
        let start_time = start_time.clone();
        let end_time = end_time.clone();
        let guest_count = guest_count.clone();
        let needs = needs.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // One in-flight submission at a time
            if *submitting {
                return;
            }
            submitting.set(true);

            let payload = RentalPayload {
                name: (*name).clone(),
                phone: (*phone).clone(),
                email: (*email).clone(),
                event_type: (*event_type).clone(),
                space_requested: (*space_requested).clone(),
                event_date: (*event_date).clone(),
                start_time: (*start_time).clone(),
                end_time: (*end_time).clone(),
                guest_count: (*guest_count).clone(),
                additional_needs: join_needs(&needs),
                message: (*message).clone(),
            };

            let fields = [
                name.clone(),
                phone.clone(),
                email.clone(),
                event_type.clone(),
                space_requested.clone(),
                event_date.clone(),
                start_time.clone(),
                end_time.clone(),
                guest_count.clone(),
                message.clone(),
            ];
            let needs = needs.clone();
            let submitting = submitting.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match Request::post(&format!("{}/api/space-rental", config::get_backend_url()))
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        if let Ok(body) = response.json::<serde_json::Value>().await {
                            log!(format!("Rental request submitted: {}", body));
                        }
                        notify.emit(BannerMessage::success(
                            "Thank you for your rental request! We will contact you within 24-48 hours.",
                        ));
                        for (index, field) in fields.iter().enumerate() {
                            let field = field.clone();
                            Timeout::new(index as u32 * CLEAR_STAGGER_MS, move || {
                                field.set(String::new())
                            })
                            .forget();
                        }
                        let needs = needs.clone();
                        Timeout::new(fields.len() as u32 * CLEAR_STAGGER_MS, move || {
                            needs.set(Vec::new())
                        })
                        .forget();
                    }
                    Ok(response) => {
                        error!(format!(
                            "Rental request failed with status {}",
                            response.status()
                        ));
                        notify.emit(BannerMessage::error(
                            "Sorry, there was an error sending your request. Please try again.",
                        ));
                    }
                    Err(e) => {
                        error!(format!("Rental request failed: {}", e));
                        notify.emit(BannerMessage::error(
                            "Sorry, there was an error sending your request. Please try again.",
                        ));
                    }
                }

                // Restore the button whatever happened
                TimeoutFuture::new(RESTORE_DELAY_MS).await;
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="rental-form" {onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label for="rental-name">{"Name"}</label>
                    <input
                        id="rental-name"
                        type="text"
                        name="name"
                        required={true}
                        value={(*name).clone()}
                        oninput={bind_input(&name)}
                    />
                </div>
                <div class="form-group">
                    <label for="rental-phone">{"Phone"}</label>
                    <input
                        id="rental-phone"
                        type="tel"
                        name="phone"
                        required={true}
                        value={(*phone).clone()}
                        oninput={bind_input(&phone)}
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="rental-email">{"Email"}</label>
                <input
                    id="rental-email"
                    type="email"
                    name="email"
                    required={true}
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="rental-event-type">{"Event type"}</label>
                    <select
                        id="rental-event-type"
                        name="event_type"
                        required={true}
                        onchange={bind_select(&event_type)}
                    >
                        <option value="" selected={event_type.is_empty()}>{"Select..."}</option>
                        { for EVENT_TYPES.iter().map(|kind| html! {
                            <option value={*kind} selected={*event_type == *kind}>{*kind}</option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for="rental-space">{"Space requested"}</label>
                    <select
                        id="rental-space"
                        name="space_requested"
                        required={true}
                        onchange={bind_select(&space_requested)}
                    >
                        <option value="" selected={space_requested.is_empty()}>{"Select..."}</option>
                        { for SPACES.iter().map(|space| html! {
                            <option value={*space} selected={*space_requested == *space}>{*space}</option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="rental-date">{"Event date"}</label>
                    <input
                        id="rental-date"
                        type="date"
                        name="event_date"
                        required={true}
                        value={(*event_date).clone()}
                        oninput={bind_input(&event_date)}
                    />
                </div>
                <div class="form-group">
                    <label for="rental-start">{"Start time"}</label>
                    <input
                        id="rental-start"
                        type="time"
                        name="start_time"
                        required={true}
                        value={(*start_time).clone()}
                        oninput={bind_input(&start_time)}
                    />
                </div>
                <div class="form-group">
                    <label for="rental-end">{"End time"}</label>
                    <input
                        id="rental-end"
                        type="time"
                        name="end_time"
                        required={true}
                        value={(*end_time).clone()}
                        oninput={bind_input(&end_time)}
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="rental-guests">{"Expected guest count"}</label>
                <input
                    id="rental-guests"
                    type="number"
                    name="guest_count"
                    min="1"
                    required={true}
                    value={(*guest_count).clone()}
                    oninput={bind_input(&guest_count)}
                />
            </div>
            <fieldset class="form-group checkbox-group">
                <legend>{"Additional needs"}</legend>
                { for ADDITIONAL_NEEDS.iter().map(|(value, label)| html! {
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            name="additional_needs"
                            value={*value}
                            checked={needs.contains(&value.to_string())}
                            onchange={toggle_need.clone()}
                        />
                        {*label}
                    </label>
                }) }
            </fieldset>
            <div class="form-group">
                <label for="rental-message">{"Anything else we should know?"}</label>
                <textarea
                    id="rental-message"
                    name="message"
                    rows="4"
                    value={(*message).clone()}
                    oninput={bind_message}
                />
            </div>
            <button
                type="submit"
                class="submit-btn"
                disabled={*submitting}
                style={if *submitting { "opacity: 0.7" } else { "" }}
            >
                { if *submitting { "Processing..." } else { "Submit Request" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::join_needs;

    #[test]
    fn joins_checked_needs_with_comma_space() {
        let needs = vec!["AV".to_string(), "Catering".to_string()];
        assert_eq!(join_needs(&needs), "AV, Catering");
    }

    #[test]
    fn single_need_has_no_separator() {
        assert_eq!(join_needs(&["AV".to_string()]), "AV");
    }

    #[test]
    fn no_needs_serialize_to_empty_string() {
        assert_eq!(join_needs(&[]), "");
    }
}
