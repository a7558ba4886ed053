use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Percentage bar with a label line above it, used for confidence and
/// suitability scores.
pub struct ScoreBar<'a> {
    label: &'a str,
    percent: u32,
    badge: Option<&'a str>,
    color: Color,
}

impl<'a> ScoreBar<'a> {
    pub fn new(label: &'a str, percent: u32) -> Self {
        Self {
            label,
            percent,
            badge: None,
            color: Theme::ACCENT,
        }
    }

    pub fn badge(mut self, badge: &'a str) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for ScoreBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 8 {
            return;
        }

        let mut spans = vec![
            Span::styled(self.label, Theme::dim()),
            Span::raw(" "),
            Span::styled(
                format!("{}%", self.percent),
                Style::default().fg(self.color),
            ),
        ];
        if let Some(badge) = self.badge {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("[{}]", badge),
                Style::default().fg(self.color),
            ));
        }
        Paragraph::new(Line::from(spans)).render(
            Rect {
                height: 1,
                ..area
            },
            buf,
        );

        if area.height >= 2 {
            let bar = Rect {
                x: area.x,
                y: area.y + 1,
                width: area.width,
                height: 1,
            };
            render_bar(bar, buf, self.percent, self.color);
        }
    }
}

/// Fill `percent`/100 of the row with solid blocks, the rest with shade.
pub fn render_bar(area: Rect, buf: &mut Buffer, percent: u32, color: Color) {
    let ratio = (percent.min(100)) as f64 / 100.0;
    let filled = (area.width as f64 * ratio).round() as u16;

    for x in area.x..area.x + area.width {
        let ch = if x < area.x + filled { '█' } else { '░' };
        buf[(x, area.y)].set_char(ch).set_fg(color);
    }
}
