use crate::config::{Config, SEASON_OPTIONS};
use crate::logic::{
    estimate_yield, recommend_crops, validate_field_conditions, validate_field_data,
};
use crate::models::{CropRecommendation, CropType, FieldConditions, FieldData, PredictionResult};
use crate::ui::group_digits;
use crate::ui::screens::{FormField, FormMode, FormValues};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    YieldForm,
    ConditionsForm,
    Prediction,
    Recommendations,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::YieldForm),
            '2' => Some(Screen::ConditionsForm),
            _ => None,
        }
    }

    /// The form a results screen goes back to.
    pub fn back(&self) -> Self {
        match self {
            Screen::Prediction => Screen::YieldForm,
            Screen::Recommendations => Screen::ConditionsForm,
            other => *other,
        }
    }
}

pub struct FormState {
    pub mode: FormMode,
    pub values: FormValues,
    pub focused: FormField,
    pub editing: bool,
    pub edit_buffer: String,
}

impl FormState {
    pub fn new(mode: FormMode, config: &Config) -> Self {
        let mut values = FormValues::default();

        // Prefill from config so repeat runs start close to done
        values.season_index = SEASON_OPTIONS
            .iter()
            .position(|s| *s == config.default_season());
        if let Some(area) = config.farm.default_area_acres {
            values.area = format!("{}", area);
        }

        Self {
            mode,
            values,
            focused: FormField::for_mode(mode)[0],
            editing: false,
            edit_buffer: String::new(),
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next(self.mode);
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev(self.mode);
    }

    pub fn start_editing(&mut self) {
        if !self.focused.is_select() {
            self.editing = true;
            self.edit_buffer = self.values.numeric(self.focused).to_string();
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    pub fn finish_editing(&mut self) {
        self.editing = false;
        let value = std::mem::take(&mut self.edit_buffer);
        self.values.set_numeric(self.focused, value);
    }
}

pub struct RecommendationsState {
    pub selected_index: usize,
}

impl RecommendationsState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

enum PendingJob {
    Yield(FieldData),
    Recommend(FieldConditions),
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,

    // Entry forms
    pub yield_form: FormState,
    pub conditions_form: FormState,

    // Results
    pub prediction: Option<(CropType, PredictionResult)>,
    pub recommendations: Vec<CropRecommendation>,
    pub recommendations_state: RecommendationsState,

    // UI state
    pub status_message: Option<StatusMessage>,
    pending: Option<(Instant, PendingJob)>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let yield_form = FormState::new(FormMode::Yield, &config);
        let conditions_form = FormState::new(FormMode::Conditions, &config);

        Self {
            screen: Screen::YieldForm,
            should_quit: false,
            config,
            yield_form,
            conditions_form,
            prediction: None,
            recommendations: Vec::new(),
            recommendations_state: RecommendationsState::new(),
            status_message: None,
            pending: None,
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(StatusMessage {
            text: message.to_string(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, message: &str) {
        self.status_message = Some(StatusMessage {
            text: message.to_string(),
            is_error: true,
        });
    }

    pub fn is_computing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn active_form_mut(&mut self) -> Option<&mut FormState> {
        match self.screen {
            Screen::YieldForm => Some(&mut self.yield_form),
            Screen::ConditionsForm => Some(&mut self.conditions_form),
            _ => None,
        }
    }

    /// Validate the visible form and, if complete, queue the computation
    /// behind the presentation delay.
    pub fn submit_active_form(&mut self) {
        if self.is_computing() {
            return;
        }

        let job = match self.screen {
            Screen::YieldForm => match validate_field_data(&self.yield_form.values.to_field_draft())
            {
                Ok(data) => PendingJob::Yield(data),
                Err(e) => {
                    self.set_error(&e.to_string());
                    return;
                }
            },
            Screen::ConditionsForm => {
                match validate_field_conditions(&self.conditions_form.values.to_conditions_draft())
                {
                    Ok(conditions) => PendingJob::Recommend(conditions),
                    Err(e) => {
                        self.set_error(&e.to_string());
                        return;
                    }
                }
            }
            _ => return,
        };

        let delay = Duration::from_millis(self.config.ui.processing_delay_ms);
        tracing::debug!(delay_ms = self.config.ui.processing_delay_ms, "queued analysis");
        self.pending = Some((Instant::now() + delay, job));
        self.set_status("Analyzing field conditions...");
    }

    /// Called every event-loop tick; runs the queued computation once its
    /// deadline passes.
    pub fn tick(&mut self) {
        let due = matches!(self.pending, Some((ready_at, _)) if Instant::now() >= ready_at);
        if !due {
            return;
        }

        let Some((_, job)) = self.pending.take() else {
            return;
        };

        match job {
            PendingJob::Yield(data) => {
                let crop = data.crop_type;
                let result = estimate_yield(&data);
                tracing::debug!(
                    crop = %crop,
                    predicted_yield = result.predicted_yield,
                    "yield estimate complete"
                );
                self.set_status(&format!(
                    "Analysis complete: {} {} predicted for {}",
                    group_digits(result.predicted_yield),
                    result.unit,
                    crop
                ));
                self.prediction = Some((crop, result));
                self.switch_screen(Screen::Prediction);
            }
            PendingJob::Recommend(conditions) => {
                let recommendations = recommend_crops(&conditions);
                if let Some(top) = recommendations.first() {
                    self.set_status(&format!(
                        "Top recommendation: {} with {}% suitability",
                        top.crop_type,
                        top.suitability_percent()
                    ));
                }
                tracing::debug!(count = recommendations.len(), "recommendation complete");
                self.recommendations = recommendations;
                self.recommendations_state = RecommendationsState::new();
                self.switch_screen(Screen::Recommendations);
            }
        }
    }
}
