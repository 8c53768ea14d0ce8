//! Actions that modules can return to communicate with the app

use crate::app::Tab;
use crate::domain::StatusFilter;
use crate::modules::export::ExportFormat;

/// Actions returned by modules and commands. The app is the only place that
/// applies them to its state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch the active tab
    Navigate(Tab),

    /// Select a sidebar quick filter
    SetStatusFilter(StatusFilter),

    /// Replace the article search query
    SetQuery(String),

    /// Reset query and status filter
    ClearFilters,

    /// Copy text to the system clipboard
    Copy(String),

    /// Export whatever the active tab lists
    Export(ExportFormat),

    /// Show the quick create dialog
    OpenQuickCreate,

    /// Show the key help
    OpenHelp,

    /// Close current overlay/popup
    CloseOverlay,

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
