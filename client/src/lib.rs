//! # client
//!
//! Leptos UI for the Fusion diagnostics dashboard: a hero banner, quick
//! status checks, and documentation links. Rendered on the server by the
//! `server` crate; the page has no client-side behavior, so there is no
//! hydration entry point.
//!
//! This crate contains the catalogs and view model (`state`), the route page
//! (`pages`), the card components (`components`), and the timestamp
//! formatting helper (`util`).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
