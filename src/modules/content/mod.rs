//! Content module - searchable article table

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::{Tab, ViewState};
use crate::core::{Action, Module, NotifyLevel};
use crate::modules::export::ExportFormat;
use crate::ui::widgets::primitives::{CYAN, PURPLE};
use crate::ui::widgets::{badge, card, chip, key_hint, muted};

#[derive(Debug, Clone, Default)]
pub struct ContentPanel {
    selected: usize,
}

impl ContentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Keep the selection inside a list of `len` rows
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

impl Module for ContentPanel {
    fn id(&self) -> &'static str {
        "content"
    }

    fn handle_key(&mut self, key: KeyEvent, view: &ViewState) -> Action {
        let posts = view.filtered_posts();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < posts.len() {
                    self.selected += 1;
                }
                Action::None
            }
            KeyCode::Char('y') => match posts.get(self.selected) {
                Some(post) => Action::Copy(post.cover.to_string()),
                None => Action::Notify("Nothing to copy".to_string(), NotifyLevel::Warn),
            },
            KeyCode::Enter => match posts.get(self.selected) {
                Some(post) => Action::Notify(
                    format!("{} by {} [{}]", post.title, post.author, post.tags.join(", ")),
                    NotifyLevel::Info,
                ),
                None => Action::None,
            },
            // Row actions: Enter views, `o` edits, `d` deletes
            KeyCode::Char('o') if !posts.is_empty() => Action::Navigate(Tab::Editor),
            KeyCode::Char('d') => match posts.get(self.selected) {
                Some(post) => Action::Notify(
                    format!("Delete \"{}\": no backend connected", post.title),
                    NotifyLevel::Warn,
                ),
                None => Action::None,
            },
            KeyCode::Char('e') => Action::Export(ExportFormat::Csv),
            KeyCode::Char('n') => Action::Notify(
                "New Article: no backend connected".to_string(),
                NotifyLevel::Warn,
            ),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(5)])
            .split(area);

        self.render_search(frame, chunks[0], view);
        self.render_table(frame, chunks[1], view);
    }
}

impl ContentPanel {
    fn render_search(&self, frame: &mut Frame, area: Rect, view: &ViewState) {
        let query = if view.query.is_empty() {
            muted("Search articles…")
        } else {
            Span::styled(view.query.clone(), Style::default().fg(Color::White))
        };
        let mut first = vec![Span::styled("⌕ ", Style::default().fg(Color::DarkGray)), query];
        first.push(Span::raw("   "));
        first.extend(key_hint("/", "Search"));
        first.extend(key_hint("n", "New Article"));
        first.extend(key_hint("e", "Export"));

        let mut second = vec![muted("Status ")];
        for filter in crate::domain::StatusFilter::ALL {
            second.push(chip(filter.label(), filter == view.status_filter));
            second.push(Span::raw(" "));
        }
        second.extend(key_hint("f", "Cycle"));

        let block = card("Filters", None);
        frame.render_widget(
            Paragraph::new(vec![Line::from(first), Line::from(second)]).block(block),
            area,
        );
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, view: &ViewState) {
        let posts = view.filtered_posts();
        let subtitle = format!("{} result(s)", posts.len());

        let header = Row::new(vec!["Title", "Status", "Author", "Updated", "Actions", "Cover"])
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = posts
            .iter()
            .map(|post| {
                Row::new(vec![
                    Cell::from(post.title),
                    Cell::from(Line::from(badge(post.status.as_str(), CYAN))),
                    Cell::from(post.author),
                    Cell::from(Span::styled(post.updated, Style::default().fg(Color::Gray))),
                    Cell::from(muted("⏎ view · o edit · d del")),
                    Cell::from(Span::styled(post.cover, Style::default().fg(Color::DarkGray))),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(34),
            Constraint::Length(13),
            Constraint::Length(14),
            Constraint::Length(13),
            Constraint::Length(24),
            Constraint::Min(10),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(card("Articles", Some(&subtitle)))
            .highlight_style(Style::default().fg(PURPLE).add_modifier(Modifier::BOLD))
            .highlight_symbol("› ");

        let mut state = TableState::default();
        if !posts.is_empty() {
            state.select(Some(self.selected.min(posts.len() - 1)));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusFilter;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_stays_within_filtered_rows() {
        let mut panel = ContentPanel::new();
        let view = ViewState::default();
        for _ in 0..5 {
            panel.handle_key(key(KeyCode::Down), &view);
        }
        assert_eq!(panel.selected(), 2);
        panel.clamp(1);
        assert_eq!(panel.selected(), 0);
    }

    #[test]
    fn test_copy_uses_selected_cover() {
        let mut panel = ContentPanel::new();
        let view = ViewState {
            status_filter: StatusFilter::Draft,
            ..ViewState::default()
        };
        match panel.handle_key(key(KeyCode::Char('y')), &view) {
            Action::Copy(url) => assert!(url.contains("photo-1526498460520")),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_row_actions() {
        let mut panel = ContentPanel::new();
        let view = ViewState::default();
        panel.handle_key(key(KeyCode::Down), &view);
        assert_eq!(
            panel.handle_key(key(KeyCode::Char('o')), &view),
            Action::Navigate(Tab::Editor)
        );
        match panel.handle_key(key(KeyCode::Char('d')), &view) {
            Action::Notify(text, NotifyLevel::Warn) => {
                assert!(text.contains("Sustainability Initiatives 2026"), "{text}")
            }
            other => panic!("unexpected action: {other:?}"),
        }

        let empty = ViewState {
            query: "nonexistent-xyz".to_string(),
            ..ViewState::default()
        };
        assert_eq!(panel.handle_key(key(KeyCode::Char('o')), &empty), Action::None);
        assert_eq!(panel.handle_key(key(KeyCode::Char('d')), &empty), Action::None);
    }

    #[test]
    fn test_copy_with_empty_result() {
        let mut panel = ContentPanel::new();
        let view = ViewState {
            query: "nonexistent-xyz".to_string(),
            ..ViewState::default()
        };
        assert!(matches!(
            panel.handle_key(key(KeyCode::Char('y')), &view),
            Action::Notify(_, NotifyLevel::Warn)
        ));
    }
}
