use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered single-line input. Shows a dim placeholder while empty and a
/// trailing cursor while being edited.
pub struct InputWidget<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    editing: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
            editing: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .title(self.label)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.editing {
            Line::from(vec![
                Span::styled(self.value, Theme::highlight()),
                Span::styled(" ", Theme::selected()),
            ])
        } else if self.value.is_empty() {
            Line::from(Span::styled(self.placeholder, Theme::dim()))
        } else {
            let style = if self.focused {
                Theme::selected()
            } else {
                Theme::normal()
            };
            Line::from(Span::styled(self.value, style))
        };

        Paragraph::new(line).render(inner, buf);
    }
}

/// Bordered option cycler, the form's stand-in for a dropdown.
pub struct SelectWidget<'a> {
    label: &'a str,
    value: Option<&'a str>,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> SelectWidget<'a> {
    pub fn new(label: &'a str, value: Option<&'a str>) -> Self {
        Self {
            label,
            value,
            placeholder: "Select...",
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SelectWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .title(self.label)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let line = match self.value {
            Some(value) => {
                let display = if self.focused {
                    format!("< {} >", value)
                } else {
                    value.to_string()
                };
                let style = if self.focused {
                    Theme::highlight()
                } else {
                    Theme::normal()
                };
                Line::from(Span::styled(display, style))
            }
            None => Line::from(Span::styled(self.placeholder, Theme::dim())),
        };

        Paragraph::new(line).render(inner, buf);
    }
}
