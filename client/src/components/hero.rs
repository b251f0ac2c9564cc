//! Hero banner with the environment refresh timestamp.

use leptos::prelude::*;

use crate::state::dashboard::HeroRegion;

/// Page header: eyebrow, title, subtitle, and the refresh meta line.
#[component]
pub fn Hero(hero: HeroRegion) -> impl IntoView {
    let datetime = hero.refreshed_at.machine().to_owned();
    let display = hero.refreshed_at.display().to_owned();

    view! {
        <header class="hero">
            <div class="hero__content">
                <p class="hero__eyebrow">{hero.eyebrow}</p>
                <h1 class="hero__title">{hero.title}</h1>
                <p class="hero__subtitle">{hero.subtitle}</p>
                <div class="hero__meta">
                    <span class="meta-indicator" aria-hidden="true"></span>
                    <span class="meta-label">{hero.meta_label}</span>
                    <time class="meta-timestamp" datetime=datetime>
                        {display}
                    </time>
                </div>
            </div>
        </header>
    }
}
