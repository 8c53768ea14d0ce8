use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::Tab;
use crate::domain::StatusFilter;

pub const SIDEBAR_WIDTH: u16 = 24;

/// Row (inside the sidebar border) of the first tab button
pub const SIDEBAR_TAB_ROW: u16 = 0;
/// Row (inside the sidebar border) of the first quick filter chip
pub const SIDEBAR_CHIP_ROW: u16 = 6;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
    pub footer: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(vertical[1]);

    UiAreas {
        size,
        header: vertical[0],
        sidebar: body[0],
        main: body[1],
        status_line: vertical[2],
        command_line: vertical[3],
        footer: vertical[4],
    }
}

/// What a click in the sidebar lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarHit {
    Tab(Tab),
    Filter(StatusFilter),
}

pub fn sidebar_hit(areas: &UiAreas, col: u16, row: u16) -> Option<SidebarHit> {
    let sidebar = areas.sidebar;
    // Border takes one cell on each side
    if sidebar.width < 3 || sidebar.height < 3 {
        return None;
    }
    let inner_x = sidebar.x + 1;
    let inner_y = sidebar.y + 1;
    if col < inner_x || col >= sidebar.x + sidebar.width - 1 || row < inner_y {
        return None;
    }
    let line = row - inner_y;

    let tab_start = SIDEBAR_TAB_ROW;
    let tab_end = tab_start + Tab::ALL.len() as u16;
    if (tab_start..tab_end).contains(&line) {
        return Some(SidebarHit::Tab(Tab::ALL[(line - tab_start) as usize]));
    }

    let chip_start = SIDEBAR_CHIP_ROW;
    let chip_end = chip_start + StatusFilter::ALL.len() as u16;
    if (chip_start..chip_end).contains(&line) {
        return Some(SidebarHit::Filter(
            StatusFilter::ALL[(line - chip_start) as usize],
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_hits() {
        let areas = areas(Rect::new(0, 0, 120, 40));
        // Header is 3 rows, sidebar border 1 row
        let first_row = areas.sidebar.y + 1;
        assert_eq!(
            sidebar_hit(&areas, 2, first_row),
            Some(SidebarHit::Tab(Tab::Dashboard))
        );
        assert_eq!(
            sidebar_hit(&areas, 2, first_row + 3),
            Some(SidebarHit::Tab(Tab::Media))
        );
        assert_eq!(sidebar_hit(&areas, 2, first_row + 4), None);
        assert_eq!(
            sidebar_hit(&areas, 2, first_row + SIDEBAR_CHIP_ROW + 2),
            Some(SidebarHit::Filter(StatusFilter::Draft))
        );
        assert_eq!(sidebar_hit(&areas, 60, first_row), None);
    }
}
