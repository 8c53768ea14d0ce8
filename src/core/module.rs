//! Module trait for the tab panels

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::Action;
use crate::app::ViewState;

/// A tab panel. Panels read the view state and report intent through
/// [`Action`]s; they never mutate the view state themselves.
pub trait Module {
    /// Identifier used in logs
    fn id(&self) -> &'static str;

    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, view: &ViewState) -> Action;

    /// Draw the panel into `area`
    fn render(&self, frame: &mut Frame, area: Rect, view: &ViewState);
}
