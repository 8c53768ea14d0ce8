//! Assyad CMS: a terminal mock of a content management dashboard.
//!
//! The whole UI is driven by [`app::ViewState`]: the active tab, the search
//! query and the status filter. Data is a fixed set of demo fixtures.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod input;
pub mod logging;
pub mod modules;
pub mod ui;
