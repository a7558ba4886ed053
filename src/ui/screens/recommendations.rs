use crate::models::CropRecommendation;
use crate::ui::components::ScoreBar;
use crate::ui::{group_digits, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct RecommendationsScreen<'a> {
    recommendations: &'a [CropRecommendation],
    selected_index: usize,
}

impl<'a> RecommendationsScreen<'a> {
    pub fn new(recommendations: &'a [CropRecommendation]) -> Self {
        Self {
            recommendations,
            selected_index: 0,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }
}

impl Widget for RecommendationsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Crop Recommendations", Theme::title()),
            Span::styled(
                " - best crops for your field conditions",
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);

        self.render_ranking(content[0], buf);
        self.render_details(content[1], buf);

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Navigate ", Theme::nav_label()),
            Span::styled("[2]", Theme::nav_key()),
            Span::styled("Edit Conditions ", Theme::nav_label()),
            Span::styled("[1]", Theme::nav_key()),
            Span::styled("Yield Form ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl RecommendationsScreen<'_> {
    fn render_ranking(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Ranking")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.recommendations.is_empty() {
            Paragraph::new(Span::styled("No recommendations yet", Theme::dim()))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let marker = if i == 0 { "★ " } else { "  " };
                let line = Line::from(vec![
                    Span::styled(marker, Style::default().fg(Theme::WARNING)),
                    Span::styled(format!("{}. ", i + 1), Theme::dim()),
                    Span::raw(format!("{} ", rec.crop_type.icon())),
                    Span::styled(format!("{:<10}", rec.crop_type.as_str()), Theme::normal()),
                    Span::styled(
                        format!("{:>4}% ", rec.suitability_percent()),
                        Style::default().fg(rec.suitability_color()),
                    ),
                    Span::styled(
                        rec.suitability_label(),
                        Style::default().fg(rec.suitability_color()),
                    ),
                ]);

                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rec = match self.recommendations.get(self.selected_index) {
            Some(r) => r,
            None => {
                Paragraph::new(Span::styled(
                    "Select a crop to view details",
                    Theme::dim(),
                ))
                .render(inner, buf);
                return;
            }
        };

        let mut lines = Vec::new();

        let mut heading = vec![
            Span::raw(format!("{} ", rec.crop_type.icon())),
            Span::styled(rec.crop_type.as_str(), Theme::header()),
        ];
        if self.selected_index == 0 {
            heading.push(Span::styled(
                "  Top Pick",
                Style::default().fg(Theme::WARNING),
            ));
        }
        lines.push(Line::from(heading));
        lines.push(Line::from(vec![]));

        lines.push(Line::from(vec![
            Span::styled("Predicted yield: ", Theme::dim()),
            Span::styled(
                format!("{} kg/acre", group_digits(rec.predicted_yield)),
                Theme::highlight(),
            ),
        ]));
        lines.push(Line::from(vec![]));

        Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);

        // Suitability bar below the static lines
        if inner.height > 5 {
            let bar_area = Rect {
                x: inner.x,
                y: inner.y + 4,
                width: inner.width,
                height: 2,
            };
            ScoreBar::new("Suitability", rec.suitability_percent())
                .badge(rec.suitability_label())
                .color(rec.suitability_color())
                .render(bar_area, buf);
        }

        if inner.height > 8 {
            let reasons_area = Rect {
                x: inner.x,
                y: inner.y + 7,
                width: inner.width,
                height: inner.height - 7,
            };
            let mut reason_lines = Vec::new();
            for reason in rec.top_reasons() {
                reason_lines.push(Line::from(vec![
                    Span::styled("✓ ", Theme::success()),
                    Span::styled(reason.as_str(), Theme::normal()),
                ]));
            }
            reason_lines.push(Line::from(vec![]));
            reason_lines.push(Line::from(Span::styled(
                "Based on soil, weather, and nutrient analysis",
                Theme::dim(),
            )));
            Paragraph::new(reason_lines)
                .wrap(Wrap { trim: true })
                .render(reasons_area, buf);
        }
    }
}
