//! UI Modules
//!
//! Each tab panel implements the Module trait and handles its own:
//! - Key input processing
//! - Rendering
//!
//! Modules:
//! - dashboard: hero, KPIs, charts, featured stories, activity log
//! - content: searchable, filterable article table
//! - editor: article form and meta settings
//! - media: media library grid
//! - export: CSV/JSON export of the active list

pub mod content;
pub mod dashboard;
pub mod editor;
pub mod export;
pub mod media;
