//! Dashboard data: validated catalogs and the mounted view model.

pub mod catalog;
pub mod dashboard;
