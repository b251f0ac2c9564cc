//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate environment concerns (here, the wall clock and
//! date formatting) from page and component logic.

pub mod timestamp;
