use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::core::{Action, Command, Module, NotifyLevel};
use crate::domain::fixtures::DEMO_POSTS;
use crate::domain::{filter_posts, Post, StatusFilter};
use crate::error::Error;
use crate::modules::content::ContentPanel;
use crate::modules::dashboard::Dashboard;
use crate::modules::editor::EditorPanel;
use crate::modules::export::{self, ExportFormat};
use crate::modules::media::MediaPanel;

/// Main tabs in the application
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Content,
    Editor,
    Media,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Content, Tab::Editor, Tab::Media];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Content => "Content",
            Tab::Editor => "Editor",
            Tab::Media => "Media Library",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Content => "content",
            Tab::Editor => "editor",
            Tab::Media => "media",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Dashboard => '1',
            Tab::Content => '2',
            Tab::Editor => '3',
            Tab::Media => '4',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Tab> {
        Tab::ALL.iter().copied().find(|tab| tab.shortcut() == c)
    }

    pub fn next(&self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| t == self).unwrap_or(0);
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| t == self).unwrap_or(0);
        Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" => Ok(Tab::Dashboard),
            "content" => Ok(Tab::Content),
            "editor" => Ok(Tab::Editor),
            "media" => Ok(Tab::Media),
            _ => Err(Error::UnknownTab(s.to_string())),
        }
    }
}

/// Everything the panels render from. Lives for one session only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active_tab: Tab,
    pub query: String,
    pub status_filter: StatusFilter,
}

impl ViewState {
    pub fn filtered_posts(&self) -> Vec<&'static Post> {
        filter_posts(DEMO_POSTS, &self.query, self.status_filter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommandBar {
    pub input: String,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

pub struct App {
    pub view: ViewState,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub dashboard: Dashboard,
    pub content: ContentPanel,
    pub editor: EditorPanel,
    pub media: MediaPanel,
    pub status: Option<StatusMessage>,
    pub export_dir: Option<PathBuf>,
    pub last_copied: Option<String>,
    pub help_open: bool,
    pub quick_create_open: bool,
    pub should_quit: bool,
    status_ttl: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_view(ViewState::default())
    }

    pub fn with_view(view: ViewState) -> Self {
        Self {
            view,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            dashboard: Dashboard::new(),
            content: ContentPanel::new(),
            editor: EditorPanel::new(),
            media: MediaPanel::new(),
            status: None,
            export_dir: None,
            last_copied: None,
            help_open: false,
            quick_create_open: false,
            should_quit: false,
            status_ttl: Duration::from_secs(3),
        }
    }

    pub fn filtered_posts(&self) -> Vec<&'static Post> {
        self.view.filtered_posts()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.view.active_tab != tab {
            info!(from = %self.view.active_tab, to = %tab, "switch tab");
        }
        self.view.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.view.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.view.active_tab.prev());
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        if self.view.status_filter != filter {
            info!(filter = %filter, "status filter");
        }
        self.view.status_filter = filter;
        self.content.clamp(self.view.filtered_posts().len());
    }

    pub fn cycle_status_filter(&mut self, forward: bool) {
        let next = if forward {
            self.view.status_filter.next()
        } else {
            self.view.status_filter.prev()
        };
        self.set_status_filter(next);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view.query = query.into();
        debug!(query = %self.view.query, "query");
        self.content.clamp(self.view.filtered_posts().len());
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.view.query);
        query.push(c);
        self.set_query(query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = std::mem::take(&mut self.view.query);
        query.pop();
        self.set_query(query);
    }

    pub fn clear_filters(&mut self) {
        self.set_query(String::new());
        self.set_status_filter(StatusFilter::All);
        self.set_status("Filters cleared", StatusLevel::Info);
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > self.status_ttl {
                self.status = None;
            }
        }
    }

    // === Input modes ===

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    /// Parse and run whatever is in the command bar
    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        let cmd = crate::core::parse_command(&input);
        let action = self.execute_command(&cmd);
        self.apply_action(action);
    }

    /// Route a key to the panel of the active tab
    pub fn dispatch_panel_key(&mut self, key: KeyEvent) -> Action {
        let panel: &mut dyn Module = match self.view.active_tab {
            Tab::Dashboard => &mut self.dashboard,
            Tab::Content => &mut self.content,
            Tab::Editor => &mut self.editor,
            Tab::Media => &mut self.media,
        };
        let action = panel.handle_key(key, &self.view);
        if action != Action::None {
            debug!(panel = panel.id(), ?action, "panel action");
        }
        action
    }

    fn copy_to_clipboard(&mut self, text: String) {
        use arboard::Clipboard;

        match Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(text.clone()).is_ok() {
                    info!(len = text.len(), "copied to clipboard");
                    self.set_status(format!("Copied: {}", truncate_str(&text, 40)), StatusLevel::Info);
                    self.last_copied = Some(text);
                } else {
                    self.set_status("Failed to copy to clipboard", StatusLevel::Error);
                }
            }
            Err(err) => {
                warn!(%err, "clipboard unavailable");
                self.set_status("Clipboard not available", StatusLevel::Error);
            }
        }
    }
}

impl App {
    /// Execute a parsed command
    pub fn execute_command(&self, cmd: &Command) -> Action {
        match cmd {
            Command::Dashboard => Action::Navigate(Tab::Dashboard),
            Command::Content => Action::Navigate(Tab::Content),
            Command::Editor => Action::Navigate(Tab::Editor),
            Command::Media => Action::Navigate(Tab::Media),

            Command::Filter(Some(value)) => match value.parse::<StatusFilter>() {
                Ok(filter) => Action::SetStatusFilter(filter),
                Err(err) => Action::Notify(err.to_string(), NotifyLevel::Warn),
            },
            Command::Filter(None) => Action::Notify(
                "Usage: filter <all|draft|published|scheduled>".to_string(),
                NotifyLevel::Warn,
            ),
            Command::Search(query) => Action::SetQuery(query.clone().unwrap_or_default()),
            Command::Clear => Action::ClearFilters,

            Command::Export(format) => match format.as_deref() {
                None => Action::Export(ExportFormat::Csv),
                Some(raw) => match raw.parse::<ExportFormat>() {
                    Ok(format) => Action::Export(format),
                    Err(err) => Action::Notify(err.to_string(), NotifyLevel::Warn),
                },
            },
            Command::New => Action::OpenQuickCreate,
            Command::Help => Action::OpenHelp,
            Command::Quit => Action::Quit,

            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(tab) => self.select_tab(tab),
            Action::SetStatusFilter(filter) => self.set_status_filter(filter),
            Action::SetQuery(query) => self.set_query(query),
            Action::ClearFilters => self.clear_filters(),
            Action::Copy(text) => self.copy_to_clipboard(text),
            Action::Export(format) => {
                let result = export::export_current_view(self, format);
                self.apply_action(result);
            }
            Action::OpenQuickCreate => self.quick_create_open = true,
            Action::OpenHelp => self.help_open = true,
            Action::CloseOverlay => {
                self.quick_create_open = false;
                self.help_open = false;
            }
            Action::Notify(msg, level) => {
                let level = StatusLevel::from(level);
                if level == StatusLevel::Error {
                    warn!(message = %msg, "error surfaced to status line");
                }
                self.set_status(msg, level);
            }
            Action::Quit => self.should_quit = true,
        }
    }
}

pub fn truncate_str(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    value.chars().take(max).collect::<String>() + "…"
}
