//! Tab management module
//!
//! Contains:
//! - `state` - the owned tab collection and its navigation rules
//! - `titles` - the single source of truth for tab labels and grouping
//! - `strip` - the horizontal tab bar
//! - `page` - per-tab content wrapper
//! - `registry` - mapping path -> View (the single source of truth)

pub mod page;
pub mod registry;
pub mod state;
pub mod strip;
pub mod titles;

pub use page::TabPages;
pub use strip::TabStrip;
