use crate::config::SEASON_OPTIONS;
use crate::models::{CropType, FieldConditionsDraft, FieldDataDraft, CROP_CATALOG};
use crate::ui::components::{InputWidget, SelectWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Which of the two entry forms is shown. The conditions form is the same
/// grid without the crop selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Yield,
    Conditions,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Yield => "Yield Prediction",
            FormMode::Conditions => "Crop Recommendation",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            FormMode::Yield => "Enter your field parameters for accurate yield prediction",
            FormMode::Conditions => "Enter your field conditions to find the best suited crops",
        }
    }

    fn form_heading(&self) -> &'static str {
        match self {
            FormMode::Yield => " - Field Data Input",
            FormMode::Conditions => " - Field Conditions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CropType,
    Season,
    Area,
    SoilPh,
    Nitrogen,
    Phosphorus,
    Potassium,
    Rainfall,
    Temperature,
    Humidity,
}

const YIELD_FIELDS: &[FormField] = &[
    FormField::CropType,
    FormField::Season,
    FormField::Area,
    FormField::SoilPh,
    FormField::Nitrogen,
    FormField::Phosphorus,
    FormField::Potassium,
    FormField::Rainfall,
    FormField::Temperature,
    FormField::Humidity,
];

const CONDITION_FIELDS: &[FormField] = &[
    FormField::Season,
    FormField::Area,
    FormField::SoilPh,
    FormField::Nitrogen,
    FormField::Phosphorus,
    FormField::Potassium,
    FormField::Rainfall,
    FormField::Temperature,
    FormField::Humidity,
];

// Grid rows: crop/season, area/pH, then the NPK triple and the weather triple.
const YIELD_ROWS: &[&[FormField]] = &[
    &[FormField::CropType, FormField::Season],
    &[FormField::Area, FormField::SoilPh],
    &[FormField::Nitrogen, FormField::Phosphorus, FormField::Potassium],
    &[FormField::Rainfall, FormField::Temperature, FormField::Humidity],
];

const CONDITION_ROWS: &[&[FormField]] = &[
    &[FormField::Season, FormField::Area],
    &[FormField::SoilPh],
    &[FormField::Nitrogen, FormField::Phosphorus, FormField::Potassium],
    &[FormField::Rainfall, FormField::Temperature, FormField::Humidity],
];

impl FormField {
    pub fn for_mode(mode: FormMode) -> &'static [FormField] {
        match mode {
            FormMode::Yield => YIELD_FIELDS,
            FormMode::Conditions => CONDITION_FIELDS,
        }
    }

    pub fn rows(mode: FormMode) -> &'static [&'static [FormField]] {
        match mode {
            FormMode::Yield => YIELD_ROWS,
            FormMode::Conditions => CONDITION_ROWS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::CropType => "Crop Type",
            FormField::Season => "Season",
            FormField::Area => "Field Area (acres)",
            FormField::SoilPh => "Soil pH",
            FormField::Nitrogen => "Nitrogen (kg/ha)",
            FormField::Phosphorus => "Phosphorus (kg/ha)",
            FormField::Potassium => "Potassium (kg/ha)",
            FormField::Rainfall => "Rainfall (mm)",
            FormField::Temperature => "Temperature (°C)",
            FormField::Humidity => "Humidity (%)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::CropType => "Select crop",
            FormField::Season => "Select season",
            FormField::Area => "e.g., 10",
            FormField::SoilPh => "e.g., 6.8",
            FormField::Nitrogen => "e.g., 55",
            FormField::Phosphorus => "e.g., 35",
            FormField::Potassium => "e.g., 40",
            FormField::Rainfall => "e.g., 320",
            FormField::Temperature => "e.g., 22",
            FormField::Humidity => "e.g., 65",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            FormField::CropType => {
                "Options: Wheat, Corn, Rice, Soybeans, Cotton, Barley, Sunflower"
            }
            FormField::Season => "Options: spring, summer, autumn, winter, monsoon",
            FormField::Area => "Cultivated area in acres",
            FormField::SoilPh => "Soil pH from a recent soil test (7 is neutral)",
            FormField::Nitrogen => "Available nitrogen in kg/ha",
            FormField::Phosphorus => "Available phosphorus in kg/ha",
            FormField::Potassium => "Available potassium in kg/ha",
            FormField::Rainfall => "Expected seasonal rainfall in mm",
            FormField::Temperature => "Average growing-season temperature in °C",
            FormField::Humidity => "Average relative humidity in percent",
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, FormField::CropType | FormField::Season)
    }

    pub fn next(&self, mode: FormMode) -> Self {
        let fields = Self::for_mode(mode);
        let pos = fields.iter().position(|f| f == self).unwrap_or(0);
        fields[(pos + 1) % fields.len()]
    }

    pub fn prev(&self, mode: FormMode) -> Self {
        let fields = Self::for_mode(mode);
        let pos = fields.iter().position(|f| f == self).unwrap_or(0);
        fields[(pos + fields.len() - 1) % fields.len()]
    }
}

/// Raw form entries. Numeric fields stay as typed until submission; selects
/// hold an index into their option list.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub crop_index: Option<usize>,
    pub season_index: Option<usize>,
    pub area: String,
    pub soil_ph: String,
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub rainfall: String,
    pub temperature: String,
    pub humidity: String,
}

/// Permissive numeric parse: blank means missing, anything else becomes a
/// number, with unparseable text falling back to zero.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.parse().unwrap_or(0.0))
    }
}

impl FormValues {
    pub fn crop_type(&self) -> Option<CropType> {
        self.crop_index.map(|i| CROP_CATALOG[i % CROP_CATALOG.len()])
    }

    pub fn season(&self) -> Option<&'static str> {
        self.season_index.map(|i| SEASON_OPTIONS[i % SEASON_OPTIONS.len()])
    }

    pub fn numeric(&self, field: FormField) -> &str {
        match field {
            FormField::Area => &self.area,
            FormField::SoilPh => &self.soil_ph,
            FormField::Nitrogen => &self.nitrogen,
            FormField::Phosphorus => &self.phosphorus,
            FormField::Potassium => &self.potassium,
            FormField::Rainfall => &self.rainfall,
            FormField::Temperature => &self.temperature,
            FormField::Humidity => &self.humidity,
            FormField::CropType | FormField::Season => "",
        }
    }

    pub fn set_numeric(&mut self, field: FormField, value: String) {
        match field {
            FormField::Area => self.area = value,
            FormField::SoilPh => self.soil_ph = value,
            FormField::Nitrogen => self.nitrogen = value,
            FormField::Phosphorus => self.phosphorus = value,
            FormField::Potassium => self.potassium = value,
            FormField::Rainfall => self.rainfall = value,
            FormField::Temperature => self.temperature = value,
            FormField::Humidity => self.humidity = value,
            FormField::CropType | FormField::Season => {}
        }
    }

    pub fn cycle(&mut self, field: FormField, step: isize) {
        match field {
            FormField::CropType => {
                self.crop_index = Some(cycle_index(self.crop_index, CROP_CATALOG.len(), step));
            }
            FormField::Season => {
                self.season_index = Some(cycle_index(self.season_index, SEASON_OPTIONS.len(), step));
            }
            _ => {}
        }
    }

    pub fn select_display(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::CropType => self.crop_type().map(|c| c.as_str()),
            FormField::Season => self.season(),
            _ => None,
        }
    }

    pub fn to_field_draft(&self) -> FieldDataDraft {
        FieldDataDraft {
            crop_type: self.crop_type(),
            season: self.season().map(String::from),
            area: parse_numeric(&self.area),
            soil_ph: parse_numeric(&self.soil_ph),
            nitrogen: parse_numeric(&self.nitrogen),
            phosphorus: parse_numeric(&self.phosphorus),
            potassium: parse_numeric(&self.potassium),
            rainfall: parse_numeric(&self.rainfall),
            temperature: parse_numeric(&self.temperature),
            humidity: parse_numeric(&self.humidity),
        }
    }

    pub fn to_conditions_draft(&self) -> FieldConditionsDraft {
        FieldConditionsDraft {
            season: self.season().map(String::from),
            area: parse_numeric(&self.area),
            soil_ph: parse_numeric(&self.soil_ph),
            nitrogen: parse_numeric(&self.nitrogen),
            phosphorus: parse_numeric(&self.phosphorus),
            potassium: parse_numeric(&self.potassium),
            rainfall: parse_numeric(&self.rainfall),
            temperature: parse_numeric(&self.temperature),
            humidity: parse_numeric(&self.humidity),
        }
    }
}

fn cycle_index(current: Option<usize>, len: usize, step: isize) -> usize {
    match current {
        None => 0,
        Some(i) => (i as isize + step).rem_euclid(len as isize) as usize,
    }
}

pub struct FieldFormScreen<'a> {
    mode: FormMode,
    values: &'a FormValues,
    focused: FormField,
    editing: bool,
    edit_buffer: &'a str,
    computing: bool,
}

impl<'a> FieldFormScreen<'a> {
    pub fn new(mode: FormMode, values: &'a FormValues) -> Self {
        Self {
            mode,
            values,
            focused: FormField::for_mode(mode)[0],
            editing: false,
            edit_buffer: "",
            computing: false,
        }
    }

    pub fn with_focus(mut self, field: FormField) -> Self {
        self.focused = field;
        self
    }

    pub fn editing(mut self, editing: bool, buffer: &'a str) -> Self {
        self.editing = editing;
        self.edit_buffer = buffer;
        self
    }

    pub fn computing(mut self, computing: bool) -> Self {
        self.computing = computing;
        self
    }
}

impl Widget for FieldFormScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title + subtitle
                Constraint::Length(12), // Form grid (4 rows of 3)
                Constraint::Length(3), // Help
                Constraint::Min(0),    // Spacer / computing banner
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(self.mode.title(), Theme::title()),
            Span::styled(self.mode.form_heading(), Theme::dim()),
        ]);
        let header = Paragraph::new(vec![
            title,
            Line::from(Span::styled(self.mode.subtitle(), Theme::dim())),
        ]);
        header.render(chunks[0], buf);

        self.render_grid(chunks[1], buf);
        self.render_help(chunks[2], buf);

        if self.computing {
            let banner = Paragraph::new(Line::from(Span::styled(
                "Analyzing field conditions...",
                Theme::highlight(),
            )));
            banner.render(chunks[3], buf);
        }

        let nav = Line::from(vec![
            Span::styled("[↑↓/Tab]", Theme::nav_key()),
            Span::styled("Navigate ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Edit ", Theme::nav_label()),
            Span::styled("[←→]", Theme::nav_key()),
            Span::styled("Options ", Theme::nav_label()),
            Span::styled("[c]", Theme::nav_key()),
            Span::styled("Calculate ", Theme::nav_label()),
            Span::styled("[1/2]", Theme::nav_key()),
            Span::styled("Mode ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[4], buf);
    }
}

impl FieldFormScreen<'_> {
    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let rows = FormField::rows(self.mode);
        let constraints: Vec<Constraint> = rows.iter().map(|_| Constraint::Length(3)).collect();
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (row, fields) in rows.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![
                    Constraint::Ratio(1, fields.len() as u32);
                    fields.len()
                ])
                .split(row_areas[row]);

            for (col, field) in fields.iter().enumerate() {
                self.render_field(*field, cells[col], buf);
            }
        }
    }

    fn render_field(&self, field: FormField, area: Rect, buf: &mut Buffer) {
        let is_focused = field == self.focused;

        if field.is_select() {
            SelectWidget::new(field.label(), self.values.select_display(field))
                .placeholder(field.placeholder())
                .focused(is_focused)
                .render(area, buf);
        } else {
            let editing_here = is_focused && self.editing;
            let value = if editing_here {
                self.edit_buffer
            } else {
                self.values.numeric(field)
            };
            InputWidget::new(field.label(), value)
                .placeholder(field.placeholder())
                .focused(is_focused)
                .editing(editing_here)
                .render(area, buf);
        }
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Field Help")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Span::styled(self.focused.help(), Theme::dim())).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numeric_is_permissive() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("6.8"), Some(6.8));
        assert_eq!(parse_numeric(" 320 "), Some(320.0));
        assert_eq!(parse_numeric("-5"), Some(-5.0));
        // Junk degrades to zero instead of blocking submission
        assert_eq!(parse_numeric("abc"), Some(0.0));
    }

    #[test]
    fn navigation_wraps_per_mode() {
        let first = FormField::for_mode(FormMode::Yield)[0];
        assert_eq!(first, FormField::CropType);
        assert_eq!(FormField::Humidity.next(FormMode::Yield), FormField::CropType);
        assert_eq!(FormField::CropType.prev(FormMode::Yield), FormField::Humidity);

        // Conditions mode has no crop field
        let fields = FormField::for_mode(FormMode::Conditions);
        assert!(!fields.contains(&FormField::CropType));
        assert_eq!(FormField::Humidity.next(FormMode::Conditions), FormField::Season);
    }

    #[test]
    fn rows_cover_exactly_the_mode_fields() {
        for mode in [FormMode::Yield, FormMode::Conditions] {
            let mut from_rows: Vec<FormField> =
                FormField::rows(mode).iter().flat_map(|r| r.iter().copied()).collect();
            let mut fields = FormField::for_mode(mode).to_vec();
            from_rows.sort_by_key(|f| *f as usize);
            fields.sort_by_key(|f| *f as usize);
            assert_eq!(from_rows, fields);
        }
    }

    #[test]
    fn cycling_selects_wraps_both_ways() {
        let mut values = FormValues::default();
        assert_eq!(values.crop_type(), None);
        values.cycle(FormField::CropType, 1);
        assert_eq!(values.crop_type(), Some(CROP_CATALOG[0]));
        values.cycle(FormField::CropType, -1);
        assert_eq!(values.crop_type(), Some(CROP_CATALOG[6]));

        values.cycle(FormField::Season, 1);
        assert_eq!(values.season(), Some("spring"));
        values.cycle(FormField::Season, -1);
        assert_eq!(values.season(), Some("monsoon"));
    }

    #[test]
    fn draft_assembly_reports_missing_fields_only() {
        let mut values = FormValues::default();
        values.area = "10".into();
        values.soil_ph = "6.8".into();
        let draft = values.to_field_draft();
        assert_eq!(draft.crop_type, None);
        assert_eq!(draft.season, None);
        assert_eq!(draft.area, Some(10.0));
        assert_eq!(draft.soil_ph, Some(6.8));
        assert_eq!(draft.nitrogen, None);
    }
}
