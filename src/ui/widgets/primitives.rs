//! Small typed building blocks shared by the panels

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

pub const PURPLE: Color = Color::Rgb(0x7c, 0x3a, 0xed);
pub const CYAN: Color = Color::Rgb(0x06, 0xb6, 0xd4);
pub const BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const LIGHT_PURPLE: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const NAVY: Color = Color::Rgb(0x0f, 0x27, 0x43);
pub const TEAL: Color = Color::Rgb(0x12, 0x7a, 0x8b);
pub const GOLD: Color = Color::Rgb(0xd4, 0xaf, 0x37);
pub const GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);

pub const CHART_PALETTE: [Color; 4] = [PURPLE, CYAN, BLUE, LIGHT_PURPLE];

/// Bordered card with a title and an optional muted subtitle
pub fn card<'a>(title: &'a str, subtitle: Option<&'a str>) -> Block<'a> {
    let mut spans = vec![Span::styled(
        format!(" {title} "),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if let Some(subtitle) = subtitle {
        spans.push(Span::styled(
            format!("{subtitle} "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Line::from(spans))
}

/// Selectable label. Active chips are filled, inactive ones are outlined.
pub fn chip(label: &str, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            format!(" {label} "),
            Style::default()
                .fg(Color::White)
                .bg(PURPLE)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("[{label}]"), Style::default().fg(Color::Gray))
    }
}

pub fn badge(text: &str, color: Color) -> Span<'static> {
    Span::styled(format!(" {text} "), Style::default().fg(Color::Black).bg(color))
}

pub fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

/// Key hint rendered as `[k] Label`
pub fn key_hint(key: &str, label: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{key}]"), Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {label}  ")),
    ]
}

/// One row of a proportional share bar, e.g. `News     ████████░░░░ 42%`
pub fn share_line(name: &str, value: u64, total: u64, width: usize, color: Color) -> Line<'static> {
    let total = total.max(1);
    let filled = ((value as f64 / total as f64) * width as f64).round() as usize;
    let filled = filled.min(width);
    let pct = (value as f64 / total as f64 * 100.0).round() as u64;
    Line::from(vec![
        Span::raw(format!("{name:<8} ")),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(width - filled), Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {pct:>3}%")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_share_line_proportions() {
        let line = share_line("News", 42, 100, 10, PURPLE);
        let rendered = text(&line);
        assert!(rendered.starts_with("News     "));
        assert_eq!(rendered.matches('█').count(), 4);
        assert_eq!(rendered.matches('░').count(), 6);
        assert!(rendered.ends_with(" 42%"));
    }

    #[test]
    fn test_chip_marks_active() {
        assert_eq!(chip("Draft", true).content, " Draft ");
        assert_eq!(chip("Draft", false).content, "[Draft]");
    }
}
