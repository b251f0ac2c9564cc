//! Quick-check and guide catalogs shown on the dashboard.
//!
//! DESIGN
//! ======
//! Both catalogs are immutable, order-preserving tables built once at startup
//! and shared behind `Arc`. Each record carries a stable identity key (`label`
//! for checks, `title` for guides) that keyed list rendering relies on, so
//! construction rejects duplicate keys instead of letting the view diff
//! ambiguous rows.

use std::collections::HashSet;
use std::sync::Arc;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two quick checks share the same label.
    #[error("duplicate quick check label: {0}")]
    DuplicateLabel(String),

    /// Two guides share the same title.
    #[error("duplicate guide title: {0}")]
    DuplicateTitle(String),

    /// A guide link is not an absolute http(s) URL.
    #[error("guide {title} has a non-absolute link: {link}")]
    RelativeLink { title: String, link: String },

    /// An identity key is blank.
    #[error("{catalog} entry has an empty {field}")]
    EmptyField { catalog: &'static str, field: &'static str },
}

// =============================================================================
// RECORDS
// =============================================================================

/// Readiness of one quick check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    Ready,
    ActionRequired,
}

impl CheckStatus {
    /// Short human-readable status line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::ActionRequired => "Action required",
        }
    }

    /// BEM modifier used for the card's readiness indicator.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::ActionRequired => "action-required",
        }
    }
}

/// One environment readiness record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickCheck {
    pub label: &'static str,
    pub status: CheckStatus,
    pub description: &'static str,
}

/// One documentation link record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub title: &'static str,
    pub summary: &'static str,
    pub link: &'static str,
}

// =============================================================================
// SEED DATA
// =============================================================================

pub const SEED_QUICK_CHECKS: [QuickCheck; 3] = [
    QuickCheck {
        label: "Project tooling",
        status: CheckStatus::Ready,
        description: "Vite with React and TypeScript is configured with dev, build, and preview scripts.",
    },
    QuickCheck {
        label: "Development server",
        status: CheckStatus::Ready,
        description: "Run \"npm run dev\" to start the local preview at http://localhost:3000.",
    },
    QuickCheck {
        label: "Production build",
        status: CheckStatus::Ready,
        description: "Execute \"npm run build\" to generate an optimized production bundle.",
    },
];

pub const SEED_GUIDES: [Guide; 3] = [
    Guide {
        title: "Project workspace overview",
        summary: "Understand how Builder.io projects are structured and how live previews work.",
        link: "https://www.builder.io/c/docs/projects",
    },
    Guide {
        title: "Integrate data sources",
        summary: "Connect to Supabase, Neon, or Builder CMS to power your application with live content.",
        link: "https://www.builder.io/c/docs/integrations",
    },
    Guide {
        title: "Automate your workflow",
        summary: "Use Zapier or Netlify integrations to streamline deployments and operational tasks.",
        link: "https://www.builder.io/c/docs/automation",
    },
];

// =============================================================================
// CATALOGS
// =============================================================================

/// Validated, ordered quick checks. Cloning shares the underlying table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickCheckCatalog {
    entries: Arc<[QuickCheck]>,
}

impl QuickCheckCatalog {
    /// Build a catalog, preserving declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyField`] for a blank label and
    /// [`CatalogError::DuplicateLabel`] when two checks share a label.
    pub fn new(entries: impl Into<Vec<QuickCheck>>) -> Result<Self, CatalogError> {
        let entries = entries.into();
        let mut seen = HashSet::with_capacity(entries.len());
        for check in &entries {
            if check.label.trim().is_empty() {
                return Err(CatalogError::EmptyField { catalog: "quick check", field: "label" });
            }
            if !seen.insert(check.label) {
                return Err(CatalogError::DuplicateLabel(check.label.to_owned()));
            }
        }
        Ok(Self { entries: entries.into() })
    }

    #[must_use]
    pub fn entries(&self) -> &[QuickCheck] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validated, ordered guides. Cloning shares the underlying table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideCatalog {
    entries: Arc<[Guide]>,
}

impl GuideCatalog {
    /// Build a catalog, preserving declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyField`] for a blank title,
    /// [`CatalogError::DuplicateTitle`] when two guides share a title, and
    /// [`CatalogError::RelativeLink`] when a link is not absolute.
    pub fn new(entries: impl Into<Vec<Guide>>) -> Result<Self, CatalogError> {
        let entries = entries.into();
        let mut seen = HashSet::with_capacity(entries.len());
        for guide in &entries {
            if guide.title.trim().is_empty() {
                return Err(CatalogError::EmptyField { catalog: "guide", field: "title" });
            }
            if !seen.insert(guide.title) {
                return Err(CatalogError::DuplicateTitle(guide.title.to_owned()));
            }
            if !is_absolute_link(guide.link) {
                return Err(CatalogError::RelativeLink { title: guide.title.to_owned(), link: guide.link.to_owned() });
            }
        }
        Ok(Self { entries: entries.into() })
    }

    #[must_use]
    pub fn entries(&self) -> &[Guide] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both dashboard catalogs, validated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogs {
    pub checks: QuickCheckCatalog,
    pub guides: GuideCatalog,
}

impl Catalogs {
    /// Build the catalogs shipped with the dashboard.
    ///
    /// # Errors
    ///
    /// Propagates any [`CatalogError`] from validating the seed tables.
    pub fn seed() -> Result<Self, CatalogError> {
        Ok(Self { checks: QuickCheckCatalog::new(SEED_QUICK_CHECKS)?, guides: GuideCatalog::new(SEED_GUIDES)? })
    }
}

fn is_absolute_link(link: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| link.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
