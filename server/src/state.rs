//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` holds the validated dashboard inputs. It is cloned into the
//! Leptos context closure once per request; the catalogs inside are
//! `Arc`-backed, so clones never copy the tables.

use client::state::dashboard::DashboardConfig;

#[derive(Debug, Clone)]
pub struct AppState {
    pub dashboard: DashboardConfig,
}

impl AppState {
    #[must_use]
    pub fn new(dashboard: DashboardConfig) -> Self {
        Self { dashboard }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
