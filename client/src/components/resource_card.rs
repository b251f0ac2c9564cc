//! Card linking to one documentation guide.

use leptos::prelude::*;

use crate::state::dashboard::ResourceCard as ResourceCardModel;

/// Title, summary, and an outbound "Read the guide" link.
#[component]
pub fn ResourceCard(card: ResourceCardModel) -> impl IntoView {
    let link = card.link;

    view! {
        <article class="resource-card">
            <h3 class="resource-card__title">{card.heading}</h3>
            <p class="resource-card__summary">{card.summary}</p>
            <a class="resource-card__link" href={link.href} target={link.target} rel={link.rel}>
                {link.label}
            </a>
        </article>
    }
}
