//! Campaign phase bar for the timeline tab

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const PHASE_ONE_CHAR: char = '█';
const PHASE_TWO_CHAR: char = '▓';

/// A single-line bar split into two campaign phases, with day markers
/// underneath when there is room.
pub struct PhaseBar {
    total_days: u16,
    phase_one_days: u16,
    phase_one_style: Style,
    phase_two_style: Style,
    label_style: Style,
}

impl PhaseBar {
    pub fn new(total_days: u16, phase_one_days: u16) -> Self {
        Self {
            total_days: total_days.max(1),
            phase_one_days: phase_one_days.min(total_days),
            phase_one_style: Style::default().fg(Color::Cyan),
            phase_two_style: Style::default().fg(Color::Green),
            label_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn phase_styles(mut self, phase_one: Style, phase_two: Style) -> Self {
        self.phase_one_style = phase_one;
        self.phase_two_style = phase_two;
        self
    }

    /// Column where phase two starts.
    fn split_column(&self, width: u16) -> u16 {
        ((self.phase_one_days as u32 * width as u32) / self.total_days as u32) as u16
    }
}

impl Widget for PhaseBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let split = self.split_column(area.width);
        for i in 0..area.width {
            let (ch, style) = if i < split {
                (PHASE_ONE_CHAR, self.phase_one_style)
            } else {
                (PHASE_TWO_CHAR, self.phase_two_style)
            };
            buf.get_mut(area.x + i, area.y).set_char(ch).set_style(style);
        }

        if area.height < 2 {
            return;
        }
        let row = area.y + 1;
        let start = "Day 1".to_string();
        let middle = format!("Day {}", self.phase_one_days + 1);
        let end = format!("Day {}", self.total_days);

        buf.set_stringn(area.x, row, &start, area.width as usize, self.label_style);
        let middle_x = area.x + split;
        if split > start.len() as u16 && split + middle.len() as u16 <= area.width {
            buf.set_stringn(
                middle_x,
                row,
                &middle,
                (area.width - split) as usize,
                self.label_style,
            );
        }
        let end_len = end.len() as u16;
        if area.width > split + middle.len() as u16 + end_len {
            buf.set_string(area.x + area.width - end_len, row, &end, self.label_style);
        }
    }
}
