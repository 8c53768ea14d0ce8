//! Render the whole console into a test backend and check which panel shows

use assyad_cms::app::{App, Tab};
use assyad_cms::domain::StatusFilter;
use assyad_cms::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const MARKERS: [(Tab, &str); 4] = [
    (Tab::Dashboard, "CORPORATE DASHBOARD"),
    (Tab::Content, "result(s)"),
    (Tab::Editor, "Article Editor"),
    (Tab::Media, "Upload and manage assets"),
];

fn render(app: &App) -> String {
    let backend = TestBackend::new(160, 60);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn each_tab_renders_only_its_panel() {
    for (tab, marker) in MARKERS {
        let mut app = App::new();
        app.select_tab(tab);
        let screen = render(&app);
        assert!(screen.contains(marker), "{tab}: missing {marker:?}");
        for (other, other_marker) in MARKERS {
            if other != tab {
                assert!(
                    !screen.contains(other_marker),
                    "{tab}: unexpected {other_marker:?} from {other}"
                );
            }
        }
    }
}

#[test]
fn content_panel_follows_view_state() {
    let mut app = App::new();
    app.select_tab(Tab::Content);
    app.set_status_filter(StatusFilter::Draft);
    let screen = render(&app);
    assert!(screen.contains("1 result(s)"));
    assert!(screen.contains("Sustainability Initiatives 2026"));
    assert!(!screen.contains("Port Expansion Announcement"));

    app.set_status_filter(StatusFilter::All);
    app.set_query("nonexistent-xyz");
    assert!(render(&app).contains("0 result(s)"));
}

#[test]
fn chrome_is_shared_by_all_tabs() {
    for tab in Tab::ALL {
        let mut app = App::new();
        app.select_tab(tab);
        let screen = render(&app);
        assert!(screen.contains("Assyad CMS"));
        assert!(screen.contains("QUICK FILTERS"));
        assert!(screen.contains("sample mock screens"));
    }
}

#[test]
fn quick_create_dialog_is_drawn() {
    let mut app = App::new();
    app.quick_create_open = true;
    assert!(render(&app).contains("Quick Create: News, Page, Gallery, Video"));
}
