//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one region of the dashboard tree each. They receive
//! resolved view-model values as props and hold no state of their own.

pub mod hero;
pub mod resource_card;
pub mod status_card;
