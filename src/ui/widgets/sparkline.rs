//! Mini sparkline widget for inline metrics

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const BAR_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A compact inline sparkline (single line). Each value takes `spacing` cells
/// so short series can stretch across a card.
pub struct MiniSparkline<'a> {
    data: &'a [u64],
    style: Style,
    spacing: u16,
}

impl<'a> MiniSparkline<'a> {
    pub fn new(data: &'a [u64]) -> Self {
        Self {
            data,
            style: Style::default().fg(Color::Cyan),
            spacing: 1,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing.max(1);
        self
    }
}

impl<'a> Widget for MiniSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.data.is_empty() {
            return;
        }

        let max = (*self.data.iter().max().unwrap_or(&1)).max(1);

        // Take the last N values that fit in the area
        let fit = (area.width / self.spacing) as usize;
        let data_len = self.data.len().min(fit);
        let data_start = self.data.len().saturating_sub(data_len);

        for (i, &value) in self.data[data_start..].iter().enumerate() {
            let x = area.x + i as u16 * self.spacing;
            if x >= area.x + area.width {
                break;
            }
            let ch = BAR_CHARS[scale(value, max)];
            buf.get_mut(x, area.y).set_char(ch).set_style(self.style);
        }
    }
}

fn scale(value: u64, max: u64) -> usize {
    let scaled = ((value as f64 / max as f64) * 7.0).round() as usize;
    scaled.min(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_keeps_latest_values() {
        let data = [180, 210, 240, 230, 300, 340];
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        MiniSparkline::new(&data).render(area, &mut buf);
        // Only the last four fit; the series max is drawn as a full bar
        assert_eq!(buf.get(3, 0).symbol(), "█");
        assert_ne!(buf.get(0, 0).symbol(), " ");
    }

    #[test]
    fn test_sparkline_empty_data_draws_nothing() {
        let data: [u64; 0] = [];
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        MiniSparkline::new(&data).render(area, &mut buf);
        assert_eq!(buf.get(0, 0).symbol(), " ");
    }

    #[test]
    fn test_sparkline_widget_spacing() {
        let data = [0, 8];
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        MiniSparkline::new(&data).spacing(3).render(area, &mut buf);
        assert_eq!(buf.get(0, 0).symbol(), "▁");
        assert_eq!(buf.get(3, 0).symbol(), "█");
        assert_eq!(buf.get(1, 0).symbol(), " ");
    }
}
