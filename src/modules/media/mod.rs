//! Media module - asset grid

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::ViewState;
use crate::core::{Action, Module, NotifyLevel};
use crate::domain::fixtures::{media_url, MEDIA_TILE_COUNT};
use crate::modules::export::ExportFormat;
use crate::ui::widgets::primitives::PURPLE;
use crate::ui::widgets::{card, key_hint, muted};

pub const GRID_COLUMNS: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct MediaPanel {
    selected: usize,
}

impl MediaPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn move_by(&mut self, delta: isize) {
        let target = self.selected as isize + delta;
        if (0..MEDIA_TILE_COUNT as isize).contains(&target) {
            self.selected = target as usize;
        }
    }
}

impl Module for MediaPanel {
    fn id(&self) -> &'static str {
        "media"
    }

    fn handle_key(&mut self, key: KeyEvent, _view: &ViewState) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_by(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-(GRID_COLUMNS as isize)),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(GRID_COLUMNS as isize),
            KeyCode::Char('y') => return Action::Copy(media_url(self.selected)),
            KeyCode::Char('e') => return Action::Export(ExportFormat::Csv),
            KeyCode::Char('u') => {
                return Action::Notify(
                    "Upload Files: no media storage connected".to_string(),
                    NotifyLevel::Warn,
                )
            }
            KeyCode::Char('d') => {
                return Action::Notify(
                    format!("Delete media #{}: no media storage connected", self.selected + 1),
                    NotifyLevel::Warn,
                )
            }
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, _view: &ViewState) {
        let block = card("Media Library", Some("Upload and manage assets"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(4)])
            .split(inner);

        let mut toolbar = key_hint("u", "Upload Files");
        toolbar.extend(key_hint("y", "Copy URL"));
        toolbar.extend(key_hint("d", "Delete"));
        toolbar.extend(key_hint("←↑↓→", "Select"));
        frame.render_widget(Paragraph::new(Line::from(toolbar)), parts[0]);

        let row_count = MEDIA_TILE_COUNT.div_ceil(GRID_COLUMNS);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
            .split(parts[1]);

        for (row_idx, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row_area);
            for (col_idx, tile_area) in cols.iter().enumerate() {
                let index = row_idx * GRID_COLUMNS + col_idx;
                if index >= MEDIA_TILE_COUNT {
                    break;
                }
                self.render_tile(frame, *tile_area, index);
            }
        }
    }
}

impl MediaPanel {
    fn render_tile(&self, frame: &mut Frame, area: Rect, index: usize) {
        let active = index == self.selected;
        let border = if active {
            Style::default().fg(PURPLE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" media-{} ", index + 1));

        let mut lines = vec![Line::from(Span::styled(
            "▒▒ logistics, port ▒▒",
            Style::default().fg(Color::Gray),
        ))];
        if active {
            lines.push(Line::from(muted("view · edit · delete")));
        }
        lines.push(Line::from(muted(media_url(index))));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
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
    fn test_grid_navigation() {
        let mut media = MediaPanel::new();
        let view = ViewState::default();
        media.handle_key(key(KeyCode::Down), &view);
        assert_eq!(media.selected(), 4);
        media.handle_key(key(KeyCode::Down), &view);
        assert_eq!(media.selected(), 4);
        media.handle_key(key(KeyCode::Right), &view);
        media.handle_key(key(KeyCode::Right), &view);
        media.handle_key(key(KeyCode::Right), &view);
        media.handle_key(key(KeyCode::Right), &view);
        assert_eq!(media.selected(), MEDIA_TILE_COUNT - 1);
        media.handle_key(key(KeyCode::Up), &view);
        assert_eq!(media.selected(), 3);
    }

    #[test]
    fn test_export_key_requests_export() {
        let mut media = MediaPanel::new();
        assert_eq!(
            media.handle_key(key(KeyCode::Char('e')), &ViewState::default()),
            Action::Export(ExportFormat::Csv)
        );
    }

    #[test]
    fn test_copy_tile_url() {
        let mut media = MediaPanel::new();
        let view = ViewState::default();
        media.handle_key(key(KeyCode::Right), &view);
        assert_eq!(
            media.handle_key(key(KeyCode::Char('y')), &view),
            Action::Copy(media_url(1))
        );
    }
}
