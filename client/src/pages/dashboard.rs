//! Dashboard page: hero banner, quick status checks, and guide links.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the application's only route. The page mounts a [`Dashboard`]
//! from the injected [`DashboardConfig`] exactly once; Leptos runs component
//! bodies once per mount, so the refresh timestamp stays fixed for the
//! page's lifetime.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::resource_card::ResourceCard;
use crate::components::status_card::StatusCard;
use crate::state::dashboard::{Dashboard, DashboardConfig};

/// Route-level page. Reads the catalogs from context and mounts them.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let Some(config) = use_context::<DashboardConfig>() else {
        log::error!("dashboard rendered without a DashboardConfig in context");
        #[cfg(feature = "ssr")]
        {
            if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
                response.set_status(http::StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
        return view! { <p class="dashboard-error">"Dashboard configuration unavailable."</p> }.into_any();
    };
    let dashboard = Dashboard::mount(&config);

    view! { <DashboardView dashboard=dashboard/> }.into_any()
}

/// Render an already-mounted dashboard.
#[component]
pub fn DashboardView(dashboard: Dashboard) -> impl IntoView {
    let tree = dashboard.render();
    let status = tree.status;
    let resources = tree.resources;

    view! {
        <div class="viewport">
            <Hero hero={tree.hero}/>

            <main class="main-content">
                <section class="status-section" aria-labelledby={status.heading_id}>
                    <div class="section-heading">
                        <h2 id={status.heading_id} class="section-title">{status.title}</h2>
                        <p class="section-subtitle">{status.subtitle}</p>
                    </div>
                    <div class="status-grid">
                        <For
                            each=move || status.cards.clone()
                            key=|card| card.key
                            children=|card| view! { <StatusCard card=card/> }
                        />
                    </div>
                </section>

                <section class="resources-section" aria-labelledby={resources.heading_id}>
                    <div class="section-heading">
                        <h2 id={resources.heading_id} class="section-title">{resources.title}</h2>
                        <p class="section-subtitle">{resources.subtitle}</p>
                    </div>
                    <div class="resources-grid">
                        <For
                            each=move || resources.cards.clone()
                            key=|card| card.key
                            children=|card| view! { <ResourceCard card=card/> }
                        />
                    </div>
                </section>
            </main>
        </div>
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
