#![cfg(feature = "ssr")]

use super::*;
use crate::state::catalog::{Catalogs, SEED_GUIDES, SEED_QUICK_CHECKS};
use time::macros::{datetime, offset};

fn render_html(dashboard: Dashboard) -> String {
    Owner::new().with(|| view! { <DashboardView dashboard=dashboard/> }.to_html())
}

fn seed_html() -> String {
    render_html(Dashboard::mount_at(Catalogs::seed().unwrap(), datetime!(2026-10-18 15:04 UTC)))
}

fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles.iter().map(|n| html.find(n).unwrap()).collect()
}

#[test]
fn renders_one_status_card_per_check() {
    let html = seed_html();
    assert_eq!(html.matches("status-card__title").count(), SEED_QUICK_CHECKS.len());
    assert_eq!(html.matches("status-dot--ready").count(), 3);
    for check in SEED_QUICK_CHECKS {
        assert_eq!(html.matches(check.label).count(), 1, "label {}", check.label);
    }
}

#[test]
fn renders_one_resource_card_per_guide() {
    let html = seed_html();
    assert_eq!(html.matches("resource-card__title").count(), SEED_GUIDES.len());
    assert_eq!(html.matches("Read the guide").count(), 3);
    for guide in SEED_GUIDES {
        assert_eq!(html.matches(guide.title).count(), 1, "title {}", guide.title);
        assert!(html.contains(guide.summary));
        assert!(html.contains(&format!("href=\"{}\"", guide.link)));
    }
    assert_eq!(html.matches("target=\"_blank\"").count(), 3);
    assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 3);
}

#[test]
fn cards_render_in_catalog_order() {
    let html = seed_html();
    let checks = positions(&html, &["Project tooling", "Development server", "Production build"]);
    assert!(checks.windows(2).all(|w| w[0] < w[1]));
    let links = positions(
        &html,
        &[
            "https://www.builder.io/c/docs/projects",
            "https://www.builder.io/c/docs/integrations",
            "https://www.builder.io/c/docs/automation",
        ],
    );
    assert!(links.windows(2).all(|w| w[0] < w[1]));
    assert!(checks[2] < links[0]);
}

#[test]
fn renders_hero_timestamp() {
    let html = seed_html();
    assert!(html.contains("Your development workspace is ready"));
    assert!(html.contains("Oct 18, 2026, 3:04 PM"));
    assert!(html.contains("datetime=\"2026-10-18T15:04:00Z\""));
}

#[test]
fn rerendering_a_mount_is_stable() {
    let dashboard = Dashboard::mount_at(Catalogs::seed().unwrap(), datetime!(2026-10-18 15:04 UTC));
    assert_eq!(render_html(dashboard.clone()), render_html(dashboard));
}

#[test]
fn page_mounts_config_from_context() {
    let config = DashboardConfig { catalogs: Catalogs::seed().unwrap(), utc_offset: offset!(UTC) };
    let html = Owner::new().with(|| {
        provide_context(config);
        view! { <DashboardPage/> }.to_html()
    });
    assert_eq!(html.matches("status-card__title").count(), 3);
    assert!(html.contains("meta-timestamp"));
}

#[test]
fn page_without_config_renders_notice() {
    let html = Owner::new().with(|| view! { <DashboardPage/> }.to_html());
    assert!(html.contains("Dashboard configuration unavailable."));
    assert!(!html.contains("status-card"));
}
