use chrono::{Datelike, Local};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel, Tab};
use crate::core::Module;
use crate::domain::fixtures::QUICK_CREATE;
use crate::domain::StatusFilter;
use widgets::primitives::PURPLE;
use widgets::{chip, key_hint, muted};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    draw_sidebar(f, areas.sidebar, app);
    draw_active_panel(f, areas.main, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);
    draw_footer(f, areas.footer);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
    if app.quick_create_open {
        draw_quick_create(f, areas.size);
    }
}

/// Exactly one panel is drawn per frame
fn draw_active_panel(f: &mut Frame, area: Rect, app: &App) {
    let view = &app.view;
    match view.active_tab {
        Tab::Dashboard => app.dashboard.render(f, area, view),
        Tab::Content => app.content.render(f, area, view),
        Tab::Editor => app.editor.render(f, area, view),
        Tab::Media => app.media.render(f, area, view),
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let search = if app.view.query.is_empty() {
        muted("Search articles…")
    } else {
        Span::raw(app.view.query.clone())
    };
    let title = Line::from(vec![
        Span::styled(
            " A ",
            Style::default()
                .fg(Color::White)
                .bg(PURPLE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Assyad CMS",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("/ ", Style::default().fg(Color::Yellow)),
        search,
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let mut actions = key_hint("+", "New");
    actions.extend(key_hint("?", "Help"));
    actions.extend(key_hint("q", "Quit"));
    let right = Paragraph::new(Line::from(actions))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Right);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let is_active = *tab == app.view.active_tab;
            let marker = if is_active { "› " } else { "  " };
            let style = if is_active {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{} ", tab.shortcut()), Style::default().fg(Color::Yellow)),
                Span::styled(tab.title(), style),
            ])
        })
        .collect();

    // Pad up to the chip rows so clicks line up with layout::sidebar_hit
    while (lines.len() as u16) < layout::SIDEBAR_CHIP_ROW - 1 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "QUICK FILTERS",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )));
    for filter in StatusFilter::ALL {
        let active = filter == app.view.status_filter;
        lines.push(Line::from(vec![Span::raw("  "), chip(filter.label(), active)]));
    }

    let sidebar = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Navigation")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(sidebar, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let query = if app.view.query.is_empty() {
        "--".to_string()
    } else {
        format!("\"{}\"", app.view.query)
    };
    let line = Line::from(vec![
        muted("Tab "),
        Span::raw(format!("{}  ", app.view.active_tab.title())),
        muted("Status "),
        Span::raw(format!("{}  ", app.view.status_filter.label())),
        muted("Query "),
        Span::raw(format!("{}  ", query)),
        muted("Articles "),
        Span::raw(app.filtered_posts().len().to_string()),
    ]);

    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("dashboard", "Go to dashboard"),
        ("content", "Go to content"),
        ("editor", "Go to editor"),
        ("media", "Go to media library"),
        ("filter", "filter <all|draft|published|scheduled>"),
        ("search", "search <text>"),
        ("clear", "Reset query and status filter"),
        ("export", "export [csv|json]"),
        ("new", "Quick create"),
        ("help", "Show help"),
        ("quit", "Quit"),
    ];

    let head = input.split_whitespace().next().unwrap_or_default();
    commands
        .iter()
        .find(|(cmd, _)| cmd.starts_with(head))
        .map(|(_, desc)| *desc)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input)
                .unwrap_or("dashboard | content | editor | media | filter | search | export");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Search => Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::LightCyan)),
            Span::raw(app.view.query.clone()),
            Span::styled(
                "  (Enter/Esc=done)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let mut spans = key_hint("1-4", "Tabs");
    spans.extend(key_hint("/", "Search"));
    spans.extend(key_hint("f", "Filter"));
    match app.view.active_tab {
        Tab::Dashboard => {
            spans.extend(key_hint("n", "New Content"));
            spans.extend(key_hint("m", "Media"));
            spans.extend(key_hint("e", "Export"));
        }
        Tab::Content => {
            spans.extend(key_hint("y", "Copy cover"));
            spans.extend(key_hint("e", "Export"));
        }
        Tab::Editor => {
            spans.extend(key_hint("←/→", "Status"));
            spans.extend(key_hint("s", "Save Draft"));
        }
        Tab::Media => {
            spans.extend(key_hint("y", "Copy URL"));
            spans.extend(key_hint("u", "Upload"));
        }
    }
    spans.extend(key_hint(":", "Command"));
    Line::from(spans)
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(footer_text())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

pub fn footer_text() -> String {
    format!("© {} Assyad CMS — sample mock screens", Local::now().year())
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-4        Dashboard / Content / Editor / Media"),
        Line::from("  Tab        Next tab (Shift-Tab: previous)"),
        Line::from("  j / k      Move selection"),
        Line::from("  Mouse      Click sidebar tabs and filters"),
        Line::from(""),
        Line::from("Filtering"),
        Line::from("  /          Search article titles"),
        Line::from("  f / F      Cycle status filter"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  +          Quick create"),
        Line::from("  e          Export list (Dashboard, Content)"),
        Line::from("  o / d      Edit / delete article (Content)"),
        Line::from("  a / v      View all stories / full log (Dashboard)"),
        Line::from("  ← / →      Change status chip (Editor)"),
        Line::from("  y          Copy URL (Content, Media)"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :filter draft   :search port   :clear"),
        Line::from("  :export json    :media         :new"),
        Line::from(""),
        Line::from(format!("Active tab: {}", app.view.active_tab.title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn draw_quick_create(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 20, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            QUICK_CREATE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(muted("Esc / Enter to close")),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" + ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PURPLE)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_hint() {
        assert_eq!(command_hint("fil"), Some("filter <all|draft|published|scheduled>"));
        assert_eq!(command_hint("export json"), Some("export [csv|json]"));
        assert_eq!(command_hint(""), None);
        assert_eq!(command_hint("zzz"), None);
    }

    #[test]
    fn test_footer_has_current_year() {
        let text = footer_text();
        assert!(text.contains(&Local::now().year().to_string()));
        assert!(text.ends_with("Assyad CMS — sample mock screens"));
    }
}
