//! Editor module - article form and meta settings
//!
//! The form is prefilled demo content. Save, preview and publish have no
//! backend to talk to and only report that.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::ViewState;
use crate::core::{Action, Module, NotifyLevel};
use crate::domain::fixtures::{EDITOR_DRAFT, UPLOAD_HINT};
use crate::domain::PostStatus;
use crate::modules::export::ExportFormat;
use crate::ui::widgets::{card, chip, key_hint, muted};

#[derive(Debug, Clone)]
pub struct EditorPanel {
    status: PostStatus,
}

impl Default for EditorPanel {
    fn default() -> Self {
        Self {
            status: EDITOR_DRAFT.status,
        }
    }
}

impl EditorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    fn cycle_status(&mut self, forward: bool) {
        let len = PostStatus::ALL.len();
        let idx = PostStatus::ALL
            .iter()
            .position(|s| *s == self.status)
            .unwrap_or(0);
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        self.status = PostStatus::ALL[next];
    }
}

fn no_backend(what: &str) -> Action {
    Action::Notify(format!("{what}: no backend connected"), NotifyLevel::Warn)
}

impl Module for EditorPanel {
    fn id(&self) -> &'static str {
        "editor"
    }

    fn handle_key(&mut self, key: KeyEvent, _view: &ViewState) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cycle_status(false);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cycle_status(true);
                Action::None
            }
            KeyCode::Char('s') => no_backend("Save Draft"),
            KeyCode::Char('p') => no_backend("Preview"),
            KeyCode::Char('P') => no_backend("Publish"),
            KeyCode::Char('u') => no_backend("Upload"),
            KeyCode::Char('e') => Action::Export(ExportFormat::Csv),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _view: &ViewState) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
            .split(area);

        self.render_form(frame, cols[0]);
        self.render_meta(frame, cols[1]);
    }
}

fn label(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn field(value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

impl EditorPanel {
    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let mut actions = key_hint("s", "Save Draft");
        actions.extend(key_hint("p", "Preview"));
        actions.extend(key_hint("P", "Publish"));

        let lines = vec![
            label("Title"),
            field(EDITOR_DRAFT.title),
            Line::from(""),
            label("Body"),
            field(EDITOR_DRAFT.body),
            Line::from(""),
            label("Featured Image"),
            Line::from(vec![
                muted("┆ "),
                muted(UPLOAD_HINT),
                Span::styled("  [u]", Style::default().fg(Color::Yellow)),
            ]),
            Line::from(muted(format!("preview: {}", EDITOR_DRAFT.preview))),
            Line::from(""),
            Line::from(actions),
        ];

        let block = card("Article Editor", Some("Compose and manage content"));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }

    fn render_meta(&self, frame: &mut Frame, area: Rect) {
        let mut chips = Vec::new();
        for status in PostStatus::ALL {
            chips.push(chip(status.as_str(), status == self.status));
            chips.push(Span::raw(" "));
        }

        let lines = vec![
            label("Status"),
            Line::from(chips),
            Line::from(muted("←/→ change")),
            Line::from(""),
            label("Tags"),
            field(EDITOR_DRAFT.tags),
            Line::from(""),
            label("Schedule"),
            field("yyyy-mm-dd --:--"),
        ];

        let block = card("Meta & Settings", Some("SEO, tags, scheduling"));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_draft_is_preselected() {
        assert_eq!(EditorPanel::new().status(), PostStatus::Draft);
    }

    #[test]
    fn test_status_chips_cycle() {
        let mut editor = EditorPanel::new();
        let view = ViewState::default();
        editor.handle_key(key(KeyCode::Right), &view);
        assert_eq!(editor.status(), PostStatus::Published);
        editor.handle_key(key(KeyCode::Left), &view);
        editor.handle_key(key(KeyCode::Left), &view);
        assert_eq!(editor.status(), PostStatus::Scheduled);
    }

    #[test]
    fn test_export_key_requests_export() {
        let mut editor = EditorPanel::new();
        assert_eq!(
            editor.handle_key(key(KeyCode::Char('e')), &ViewState::default()),
            Action::Export(ExportFormat::Csv)
        );
    }

    #[test]
    fn test_actions_report_missing_backend() {
        let mut editor = EditorPanel::new();
        let view = ViewState::default();
        match editor.handle_key(key(KeyCode::Char('s')), &view) {
            Action::Notify(text, NotifyLevel::Warn) => assert!(text.starts_with("Save Draft")),
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
