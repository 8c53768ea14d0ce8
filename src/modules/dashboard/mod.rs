//! Dashboard module - hero, KPIs, charts and activity feed

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType, List,
    ListItem, ListState, Paragraph, Wrap,
};
use ratatui::Frame;

use crate::app::{Tab, ViewState};
use crate::core::{Action, Module, NotifyLevel};
use crate::domain::fixtures::{
    hero_stats, ACTIVITY_LOG, CONTENT_MIX, DEMO_POSTS, DEPARTMENTS, DIVISIONS, HUBS, HUBS_MAP,
    KPIS, SEO_SCORE, TRAFFIC, UPTIME,
};
use crate::modules::export::ExportFormat;
use crate::ui::widgets::primitives::{CHART_PALETTE, CYAN, GOLD, GREEN, NAVY, PURPLE, TEAL};
use crate::ui::widgets::{badge, card, key_hint, muted, share_line, MiniSparkline};

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    selected_activity: usize,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_activity(&self) -> usize {
        self.selected_activity
    }

    fn select_prev(&mut self) {
        self.selected_activity = self.selected_activity.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected_activity + 1 < ACTIVITY_LOG.len() {
            self.selected_activity += 1;
        }
    }
}

impl Module for Dashboard {
    fn id(&self) -> &'static str {
        "dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, _view: &ViewState) -> Action {
        match key.code {
            // Hero shortcuts
            KeyCode::Char('n') => Action::Navigate(Tab::Content),
            KeyCode::Char('m') => Action::Navigate(Tab::Media),
            // Featured stories "View all"
            KeyCode::Char('a') => Action::Navigate(Tab::Content),
            KeyCode::Char('v') => Action::Notify(
                "View full log: no audit backend connected".to_string(),
                NotifyLevel::Warn,
            ),
            KeyCode::Char('e') => Action::Export(ExportFormat::Csv),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter => match ACTIVITY_LOG.get(self.selected_activity) {
                Some(entry) => Action::Notify(
                    format!(
                        "{} {} {} ({})",
                        entry.actor,
                        entry.action.to_lowercase(),
                        entry.target,
                        entry.time
                    ),
                    NotifyLevel::Info,
                ),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _view: &ViewState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),  // hero
                Constraint::Length(5),  // KPI row
                Constraint::Min(12),    // analytics
                Constraint::Length(12), // departments + health
                Constraint::Length(9),  // stories, activity, hubs
            ])
            .split(area);

        self.render_hero(frame, rows[0]);
        self.render_kpis(frame, rows[1]);

        let analytics = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[2]);
        self.render_traffic(frame, analytics[0]);
        self.render_content_mix(frame, analytics[1]);

        let dept_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[3]);
        self.render_departments(frame, dept_row[0]);
        self.render_health(frame, dept_row[1]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(38),
                Constraint::Percentage(40),
                Constraint::Percentage(22),
            ])
            .split(rows[4]);
        self.render_featured(frame, bottom[0]);
        self.render_activity(frame, bottom[1]);
        self.render_hubs(frame, bottom[2]);
    }
}

impl Dashboard {
    fn render_hero(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PURPLE))
            .title(Span::styled(
                " CORPORATE DASHBOARD ",
                Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let mut hints = key_hint("n", "New Content");
        hints.extend(key_hint("m", "Media"));
        let lines = vec![
            Line::from(Span::styled(
                "Operations & Content Overview",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(muted(DIVISIONS.join(" • "))),
            Line::from(""),
            Line::from(hints),
        ];
        frame.render_widget(Paragraph::new(lines), cols[0]);

        let stats = hero_stats();
        let lines: Vec<Line> = stats
            .chunks(2)
            .map(|pair| {
                let mut spans = Vec::new();
                for stat in pair {
                    spans.push(muted(format!("{} ", stat.label)));
                    spans.push(Span::styled(
                        format!("{:<12}", stat.value),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ));
                }
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), cols[1]);
    }

    fn render_kpis(&self, frame: &mut Frame, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, KPIS.len() as u32); KPIS.len()])
            .split(area);

        for (kpi, col) in KPIS.iter().zip(cols.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    kpi.value.to_string(),
                    Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(kpi.delta, Style::default().fg(Color::Green))),
            ];
            frame.render_widget(Paragraph::new(lines).block(card(kpi.label, None)), *col);
        }
    }

    fn render_traffic(&self, frame: &mut Frame, area: Rect) {
        let block = card("Traffic & Lead Generation", Some("Visits vs Leads (last 6 months)"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(inner);

        let visits: Vec<(f64, f64)> = TRAFFIC
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.visits as f64))
            .collect();
        let datasets = vec![Dataset::default()
            .name("visits")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(CYAN))
            .data(&visits)];

        let x_labels: Vec<Span> = TRAFFIC.iter().map(|p| Span::raw(p.month)).collect();
        let chart = Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, (TRAFFIC.len().saturating_sub(1)) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, 60_000.0])
                    .labels(vec![Span::raw("0"), Span::raw("30k"), Span::raw("60k")]),
            );
        frame.render_widget(chart, parts[0]);

        // Leads are two orders of magnitude smaller than visits; give them their own strip
        let leads: Vec<u64> = TRAFFIC.iter().map(|p| p.leads).collect();
        let strip = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(7), Constraint::Length(18), Constraint::Min(0)])
            .split(parts[1]);
        frame.render_widget(Paragraph::new(Line::from(muted("leads "))), strip[0]);
        frame.render_widget(
            MiniSparkline::new(&leads)
                .spacing(3)
                .style(Style::default().fg(TEAL)),
            strip[1],
        );
        let range = format!(
            "{}..{} per month",
            leads.iter().min().copied().unwrap_or(0),
            leads.iter().max().copied().unwrap_or(0)
        );
        frame.render_widget(Paragraph::new(Line::from(muted(range))), strip[2]);
    }

    fn render_content_mix(&self, frame: &mut Frame, area: Rect) {
        let block = card("Content Mix", Some("By type"));
        let width = (block.inner(area).width as usize).saturating_sub(14).clamp(4, 30);
        let total: u64 = CONTENT_MIX.iter().map(|s| s.value).sum();
        let lines: Vec<Line> = CONTENT_MIX
            .iter()
            .enumerate()
            .map(|(i, share)| {
                share_line(
                    share.name,
                    share.value,
                    total,
                    width,
                    CHART_PALETTE[i % CHART_PALETTE.len()],
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_departments(&self, frame: &mut Frame, area: Rect) {
        let block = card("Department Content", Some("Published vs Drafts"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(inner);

        let mut chart = BarChart::default()
            .bar_width(3)
            .bar_gap(1)
            .group_gap(3)
            .value_style(Style::default().fg(Color::Black));
        for dept in DEPARTMENTS {
            let bars = [
                Bar::default()
                    .value(dept.published)
                    .style(Style::default().fg(TEAL))
                    .value_style(Style::default().fg(Color::Black).bg(TEAL)),
                Bar::default()
                    .value(dept.drafts)
                    .style(Style::default().fg(GOLD))
                    .value_style(Style::default().fg(Color::Black).bg(GOLD)),
            ];
            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(dept.dept))
                    .bars(&bars),
            );
        }
        frame.render_widget(chart, parts[0]);

        let legend = Line::from(vec![
            Span::styled("■", Style::default().fg(TEAL)),
            Span::raw(" published  "),
            Span::styled("■", Style::default().fg(GOLD)),
            Span::raw(" drafts"),
        ]);
        frame.render_widget(Paragraph::new(legend), parts[1]);
    }

    fn render_health(&self, frame: &mut Frame, area: Rect) {
        let block = card("CMS Health", Some("Uptime & SEO Score"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        let uptime = Gauge::default()
            .block(Block::default().title("Uptime"))
            .gauge_style(Style::default().fg(GREEN).bg(Color::DarkGray))
            .ratio(UPTIME / 100.0)
            .label(format!("{UPTIME}%"));
        frame.render_widget(uptime, parts[0]);

        let seo = Gauge::default()
            .block(Block::default().title("SEO Score"))
            .gauge_style(Style::default().fg(NAVY).bg(Color::DarkGray))
            .percent(SEO_SCORE)
            .label(SEO_SCORE.to_string());
        frame.render_widget(seo, parts[1]);
    }

    fn render_featured(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for post in DEMO_POSTS {
            lines.push(Line::from(Span::styled(
                post.title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            let mut meta = vec![muted(format!("{} • {}  ", post.author, post.updated))];
            for tag in post.tags {
                meta.push(badge(tag, Color::Gray));
                meta.push(Span::raw(" "));
            }
            lines.push(Line::from(meta));
        }
        lines.push(Line::from(key_hint("a", "View all")));
        let block = card("Featured Stories", Some("Latest highlights"));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_activity(&self, frame: &mut Frame, area: Rect) {
        let block = card("Activity Log", Some("Latest actions & audit trail"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(inner);

        let items: Vec<ListItem> = ACTIVITY_LOG
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.actor, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(format!(" {} ", entry.action.to_lowercase())),
                    Span::styled(entry.target, Style::default().fg(Color::White)),
                    muted(format!("  {}", entry.time)),
                ]))
            })
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().fg(CYAN).add_modifier(Modifier::BOLD))
            .highlight_symbol("› ");
        let mut state = ListState::default();
        state.select(Some(self.selected_activity.min(ACTIVITY_LOG.len().saturating_sub(1))));
        frame.render_stateful_widget(list, parts[0], &mut state);

        let mut actions = key_hint("e", "Export");
        actions.extend(key_hint("v", "View full"));
        let footer = vec![
            Line::from(muted(format!("Showing recent {} activities", ACTIVITY_LOG.len()))),
            Line::from(actions),
        ];
        frame.render_widget(Paragraph::new(footer), parts[1]);
    }

    fn render_hubs(&self, frame: &mut Frame, area: Rect) {
        let mut badges = Vec::new();
        for hub in HUBS {
            badges.push(badge(hub, Color::Gray));
            badges.push(Span::raw(" "));
        }
        let lines = vec![Line::from(badges), Line::from(""), Line::from(muted(HUBS_MAP))];
        let block = card("Global Operational Hubs", Some("Map preview placeholder"));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}
