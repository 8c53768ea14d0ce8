use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use assyad_cms::app::{App, StatusLevel, Tab, ViewState};
use assyad_cms::config::{self, Config};
use assyad_cms::domain::StatusFilter;
use assyad_cms::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "assyad",
    version,
    about = "Assyad CMS: a terminal mock of a content management dashboard"
)]
struct Args {
    /// Tab to open on start (dashboard, content, editor, media)
    #[arg(long)]
    tab: Option<Tab>,

    /// Initial status filter (all, draft, published, scheduled)
    #[arg(long)]
    status: Option<StatusFilter>,

    /// Initial article search query
    #[arg(long)]
    query: Option<String>,

    /// Config file (defaults to ~/.config/assyad/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to the data dir)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut startup_warnings = Vec::new();
    let config = match config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            startup_warnings.push(format!("Config ignored: {err:#}"));
            Config::default()
        }
    };

    if let Some(log_path) = args.log_file.clone().or_else(config::log_path) {
        if let Err(err) = logging::init(&log_path, &config.log_level) {
            startup_warnings.push(format!("Logging disabled: {err:#}"));
        }
    }

    let view = initial_view(&args, &config);
    info!(tab = %view.active_tab, filter = %view.status_filter, "starting");

    let mut app = App::with_view(view);
    app.export_dir = config.export_dir();
    if !startup_warnings.is_empty() {
        let message = startup_warnings.join("; ");
        warn!(%message, "startup");
        app.set_status(message, StatusLevel::Warn);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(16));
    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

/// CLI flags win over the config file, which wins over defaults
fn initial_view(args: &Args, config: &Config) -> ViewState {
    ViewState {
        active_tab: args.tab.unwrap_or(config.initial_tab),
        query: args.query.clone().unwrap_or_default(),
        status_filter: args.status.unwrap_or(config.status_filter),
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            info!("quit");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse, terminal.size()?),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
