use yew::prelude::*;

use crate::components::banner::BannerMessage;
use crate::forms::rental::RentalForm;

#[derive(Properties, PartialEq)]
pub struct RentalPageProps {
    pub active: bool,
    pub notify: Callback<BannerMessage>,
}

#[function_component(RentalPage)]
pub fn rental_page(props: &RentalPageProps) -> Html {
    html! {
        <section id="rental" class={classes!("page", props.active.then(|| "active"))}>
            <div class="section-header fade-in">
                <h2>{"Rent Our Space"}</h2>
                <p>{"The sanctuary, fellowship hall, and grounds are available for weddings, conferences, and community events."}</p>
            </div>
            <RentalForm notify={props.notify.clone()} />
        </section>
    }
}
