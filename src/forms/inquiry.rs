use gloo_console::{error, log};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::banner::BannerMessage;
use crate::config;

const RESTORE_DELAY_MS: u32 = 2_000;
const CLEAR_STAGGER_MS: u32 = 50;

#[derive(Serialize)]
struct InquiryPayload {
    name: String,
    phone: String,
    email: String,
    note: String,
}

#[derive(Properties, PartialEq)]
pub struct InquiryFormProps {
    pub notify: Callback<BannerMessage>,
}

#[function_component(InquiryForm)]
pub fn inquiry_form(props: &InquiryFormProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let note = use_state(String::new);
    let submitting = use_state(|| false);

    let bind_input = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let bind_note = {
        let note = note.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            note.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let note = note.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // One in-flight submission at a time
            if *submitting {
                return;
            }
            submitting.set(true);

            let payload = InquiryPayload {
                name: (*name).clone(),
                phone: (*phone).clone(),
                email: (*email).clone(),
                note: (*note).clone(),
            };

            let fields = [name.clone(), phone.clone(), email.clone(), note.clone()];
            let submitting = submitting.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match Request::post(&format!("{}/submit_inquiry", config::get_backend_url()))
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        if let Ok(body) = response.json::<serde_json::Value>().await {
                            log!(format!("Inquiry submitted: {}", body));
                        }
                        notify.emit(BannerMessage::success(
                            "Thank you for your inquiry! We will contact you soon.",
                        ));
                        for (index, field) in fields.iter().enumerate() {
                            let field = field.clone();
                            Timeout::new(index as u32 * CLEAR_STAGGER_MS, move || {
                                field.set(String::new())
                            })
                            .forget();
                        }
                    }
                    Ok(response) => {
                        error!(format!("Inquiry failed with status {}", response.status()));
                        notify.emit(BannerMessage::error(
                            "Sorry, there was an error sending your message. Please try again.",
                        ));
                    }
                    Err(e) => {
                        error!(format!("Inquiry failed: {}", e));
                        notify.emit(BannerMessage::error(
                            "Sorry, there was an error sending your message. Please try again.",
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
        <form class="inquiry-form" {onsubmit}>
            <div class="form-group">
                <label for="inquiry-name">{"Name"}</label>
                <input
                    id="inquiry-name"
                    type="text"
                    name="name"
                    required={true}
                    value={(*name).clone()}
                    oninput={bind_input(&name)}
                />
            </div>
            <div class="form-group">
                <label for="inquiry-phone">{"Phone"}</label>
                <input
                    id="inquiry-phone"
                    type="tel"
                    name="phone"
                    required={true}
                    value={(*phone).clone()}
                    oninput={bind_input(&phone)}
                />
            </div>
            <div class="form-group">
                <label for="inquiry-email">{"Email"}</label>
                <input
                    id="inquiry-email"
                    type="email"
                    name="email"
                    required={true}
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
            </div>
            <div class="form-group">
                <label for="inquiry-note">{"How can we help?"}</label>
                <textarea
                    id="inquiry-note"
                    name="note"
                    rows="4"
                    required={true}
                    value={(*note).clone()}
                    oninput={bind_note}
                />
            </div>
            <button
                type="submit"
                class="submit-btn"
                disabled={*submitting}
                style={if *submitting { "opacity: 0.7" } else { "" }}
            >
                { if *submitting { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}
