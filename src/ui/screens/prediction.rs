use crate::models::{CropType, PredictionResult};
use crate::ui::components::ScoreBar;
use crate::ui::{group_digits, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct PredictionScreen<'a> {
    crop: CropType,
    result: &'a PredictionResult,
}

impl<'a> PredictionScreen<'a> {
    pub fn new(crop: CropType, result: &'a PredictionResult) -> Self {
        Self { crop, result }
    }
}

impl Widget for PredictionScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(4), // Yield
                Constraint::Length(5), // Confidence
                Constraint::Min(7),    // Suggestions
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Prediction Results", Theme::title()),
            Span::styled(format!(" - {}", self.crop), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_yield(chunks[1], buf);
        self.render_confidence(chunks[2], buf);
        self.render_suggestions(chunks[3], buf);

        let nav = Line::from(vec![
            Span::styled("[1]", Theme::nav_key()),
            Span::styled("Edit Inputs ", Theme::nav_label()),
            Span::styled("[2]", Theme::nav_key()),
            Span::styled("Recommend Crops ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[4], buf);
    }
}

impl PredictionScreen<'_> {
    fn render_yield(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Predicted Yield")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());

        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::raw(format!("{} ", self.crop.icon())),
            Span::styled(
                group_digits(self.result.predicted_yield),
                Theme::header(),
            ),
            Span::styled(format!(" {}", self.result.unit), Theme::dim()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }

    fn render_confidence(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Prediction Confidence")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(1)])
            .split(inner);

        ScoreBar::new("Confidence", self.result.accuracy_percent())
            .badge(self.result.accuracy_label())
            .color(self.result.accuracy_color())
            .render(rows[0], buf);

        Paragraph::new(Span::styled(
            "Based on optimal growing conditions alignment",
            Theme::dim(),
        ))
        .render(rows[1], buf);
    }

    fn render_suggestions(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Optimization Recommendations")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.result.optimization_suggestions.is_empty() {
            Paragraph::new(Span::styled("No suggestions", Theme::dim()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .result
            .optimization_suggestions
            .iter()
            .map(|s| {
                ListItem::new(Line::from(vec![
                    Span::styled("✓ ", Theme::success()),
                    Span::styled(s.as_str(), Theme::normal()),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
