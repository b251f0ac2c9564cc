//! Card for one quick status check.
//!
//! DESIGN
//! ======
//! The indicator modifier comes from the check's status, so every status
//! variant has its own styling hook.

use leptos::prelude::*;

use crate::state::dashboard::StatusCard as StatusCardModel;

#[component]
pub fn StatusCard(card: StatusCardModel) -> impl IntoView {
    view! {
        <article class="status-card">
            <div class="status-card__header">
                <span class={card.indicator_class()} aria-hidden="true"></span>
                <h3 class="status-card__title">{card.heading}</h3>
            </div>
            <p class="status-card__state">{card.state_text()}</p>
            <p class="status-card__description">{card.description}</p>
        </article>
    }
}
