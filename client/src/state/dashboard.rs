//! Dashboard view model: catalogs plus a mount-time timestamp, rendered into
//! a tree of regions.
//!
//! DESIGN
//! ======
//! `Dashboard::mount` is the only place the clock is read. `render` is a pure
//! function of the mounted value, so calling it repeatedly within one mount
//! yields identical trees. Components consume the tree; they never touch the
//! catalogs or the clock directly.

use time::{OffsetDateTime, UtcOffset};

use crate::state::catalog::{Catalogs, CheckStatus, Guide, QuickCheck};
use crate::util::timestamp::RefreshTimestamp;

pub const HERO_EYEBROW: &str = "Fusion diagnostics";
pub const HERO_TITLE: &str = "Your development workspace is ready";
pub const HERO_SUBTITLE: &str =
    "This dashboard summarises the local tooling so you can start shipping features right away.";
pub const HERO_META_LABEL: &str = "Last environment refresh";

pub const STATUS_HEADING_ID: &str = "status-heading";
pub const STATUS_TITLE: &str = "Quick status checks";
pub const STATUS_SUBTITLE: &str =
    "Launch the dev server, iterate locally, and ship with confidence using the provided scripts.";

pub const RESOURCES_HEADING_ID: &str = "resources-heading";
pub const RESOURCES_TITLE: &str = "Helpful next steps";
pub const RESOURCES_SUBTITLE: &str =
    "Explore documentation to connect integrations, automate workflows, or manage content.";

pub const GUIDE_LINK_LABEL: &str = "Read the guide";
pub const NEW_CONTEXT_TARGET: &str = "_blank";
pub const NO_BACK_REFERENCE_REL: &str = "noopener noreferrer";

// =============================================================================
// CONFIG
// =============================================================================

/// Immutable inputs injected into the dashboard at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub catalogs: Catalogs,
    /// Offset used when formatting the refresh timestamp.
    pub utc_offset: UtcOffset,
}

// =============================================================================
// VIEW TREE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRegion {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub meta_label: &'static str,
    pub refreshed_at: RefreshTimestamp,
}

/// A titled section holding an ordered list of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegion<C> {
    pub heading_id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<C>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCard {
    pub key: &'static str,
    pub heading: &'static str,
    pub status: CheckStatus,
    pub description: &'static str,
}

impl StatusCard {
    fn from_check(check: &QuickCheck) -> Self {
        Self { key: check.label, heading: check.label, status: check.status, description: check.description }
    }

    /// Text line under the heading.
    #[must_use]
    pub fn state_text(&self) -> &'static str {
        self.status.label()
    }

    /// Classes for the readiness indicator dot.
    #[must_use]
    pub fn indicator_class(&self) -> String {
        format!("status-dot status-dot--{}", self.status.modifier())
    }
}

/// Link that opens in a new browsing context without a reference back to
/// the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundLink {
    pub href: &'static str,
    pub label: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceCard {
    pub key: &'static str,
    pub heading: &'static str,
    pub summary: &'static str,
    pub link: OutboundLink,
}

impl ResourceCard {
    fn from_guide(guide: &Guide) -> Self {
        Self {
            key: guide.title,
            heading: guide.title,
            summary: guide.summary,
            link: OutboundLink {
                href: guide.link,
                label: GUIDE_LINK_LABEL,
                target: NEW_CONTEXT_TARGET,
                rel: NO_BACK_REFERENCE_REL,
            },
        }
    }
}

/// Fully resolved dashboard: header, status section, resources section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardTree {
    pub hero: HeroRegion,
    pub status: SectionRegion<StatusCard>,
    pub resources: SectionRegion<ResourceCard>,
}

// =============================================================================
// MOUNTED DASHBOARD
// =============================================================================

/// One activation of the dashboard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    catalogs: Catalogs,
    refreshed_at: RefreshTimestamp,
}

impl Dashboard {
    /// Mount against the wall clock.
    #[must_use]
    pub fn mount(config: &DashboardConfig) -> Self {
        Self::with_timestamp(config.catalogs.clone(), RefreshTimestamp::capture(config.utc_offset))
    }

    /// Mount at a fixed instant.
    #[must_use]
    pub fn mount_at(catalogs: Catalogs, at: OffsetDateTime) -> Self {
        Self::with_timestamp(catalogs, RefreshTimestamp::from_datetime(at))
    }

    fn with_timestamp(catalogs: Catalogs, refreshed_at: RefreshTimestamp) -> Self {
        log::debug!(
            "dashboard mounted: {} checks, {} guides, refreshed {}",
            catalogs.checks.len(),
            catalogs.guides.len(),
            refreshed_at.machine()
        );
        Self { catalogs, refreshed_at }
    }

    #[must_use]
    pub fn refreshed_at(&self) -> &RefreshTimestamp {
        &self.refreshed_at
    }

    #[must_use]
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Build the region tree. Card order follows catalog order.
    #[must_use]
    pub fn render(&self) -> DashboardTree {
        DashboardTree {
            hero: HeroRegion {
                eyebrow: HERO_EYEBROW,
                title: HERO_TITLE,
                subtitle: HERO_SUBTITLE,
                meta_label: HERO_META_LABEL,
                refreshed_at: self.refreshed_at.clone(),
            },
            status: SectionRegion {
                heading_id: STATUS_HEADING_ID,
                title: STATUS_TITLE,
                subtitle: STATUS_SUBTITLE,
                cards: self.catalogs.checks.entries().iter().map(StatusCard::from_check).collect(),
            },
            resources: SectionRegion {
                heading_id: RESOURCES_HEADING_ID,
                title: RESOURCES_TITLE,
                subtitle: RESOURCES_SUBTITLE,
                cards: self.catalogs.guides.entries().iter().map(ResourceCard::from_guide).collect(),
            },
        }
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
