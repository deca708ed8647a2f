//! Planner screen state, survey form editing, and key handling.

use crate::messages;
use crate::runner::Signal;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nightingale_core::{GenerationOptions, GenerationRequest, ModelChoice, Transcript};
use nightingale_interface::TextGenerator;
use nightingale_plan::{
    CreativityMode, HORIZON_OPTIONS, PEAK_DAY_OPTIONS, PRIORITY_OPTIONS, PlanLog, PlanRecord,
    StaffingSurvey, export,
};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Increment applied to the output-token cap by the arrow keys.
const TOKEN_STEP: u32 = 256;

/// Cap the arrow keys start from when no cap is set.
const TOKEN_START: u32 = 1024;

/// One editable line of the survey form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Facility,
    Manager,
    Date,
    StaffCount,
    AvgOvertime,
    PeakDays,
    ShiftHours,
    Cause,
    Intervention,
    Constraints,
    Horizon,
    MaxProposals,
    Priority,
    Checklist,
    Mode,
    MaxTokens,
}

impl FormField {
    /// Form lines top to bottom.
    pub const ALL: [FormField; 16] = [
        FormField::Facility,
        FormField::Manager,
        FormField::Date,
        FormField::StaffCount,
        FormField::AvgOvertime,
        FormField::PeakDays,
        FormField::ShiftHours,
        FormField::Cause,
        FormField::Intervention,
        FormField::Constraints,
        FormField::Horizon,
        FormField::MaxProposals,
        FormField::Priority,
        FormField::Checklist,
        FormField::Mode,
        FormField::MaxTokens,
    ];

    /// Label shown at the left of the form line.
    ///
    /// The survey lines reuse the prompt labels so the operator sees the
    /// same wording the model does; the last two cover the sampling
    /// parameters that never enter the prompt.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Facility => "部署",
            FormField::Manager => "担当者",
            FormField::Date => "記入日",
            FormField::StaffCount => "看護師数",
            FormField::AvgOvertime => "平均残業時間",
            FormField::PeakDays => "残業の多いシフト",
            FormField::ShiftHours => "1シフトの長さ",
            FormField::Cause => "主な原因",
            FormField::Intervention => "実施済みの対策",
            FormField::Constraints => "制約条件",
            FormField::Horizon => "計画期間",
            FormField::MaxProposals => "提案数の上限",
            FormField::Priority => "優先方針",
            FormField::Checklist => "チェックリストを含める",
            FormField::Mode => "生成モード",
            FormField::MaxTokens => "最大出力トークン",
        }
    }
}

/// Planner screen state, generic over the text generator driving it.
///
/// `driver` is `None` when no API key was configured; the form stays
/// editable and every generate action resolves to the configuration notice
/// without touching the transcript or the network.
#[derive(Debug)]
pub struct PlanApp<D: TextGenerator> {
    driver: Option<D>,
    /// Survey being edited in place.
    pub survey: StaffingSurvey,
    /// Survey/result pairs recorded this session.
    pub transcript: Transcript,
    /// Generated plans, oldest first.
    pub plans: PlanLog,
    /// Model the next generation will use.
    pub model: ModelChoice,
    /// Creativity preset feeding the request temperature.
    pub mode: CreativityMode,
    /// Optional cap on generated tokens; zero means unset.
    pub max_output_tokens: Option<u32>,
    /// Index into [`FormField::ALL`] of the focused line.
    pub focus: usize,
    /// Cursor into [`PEAK_DAY_OPTIONS`] while the day line has focus.
    pub day_cursor: usize,
    /// Directory the CSV export is written into.
    pub export_dir: PathBuf,
    /// Status line under the panes.
    pub status: String,
}

impl<D: TextGenerator> PlanApp<D> {
    /// Creates the planner screen over an optional generation driver.
    pub fn new(driver: Option<D>) -> Self {
        let status = if driver.is_some() {
            messages::model_header(ModelChoice::default())
        } else {
            messages::MISSING_KEY_NOTICE.to_string()
        };
        Self {
            driver,
            survey: StaffingSurvey::default(),
            transcript: Transcript::new(),
            plans: PlanLog::new(),
            model: ModelChoice::default(),
            mode: CreativityMode::default(),
            max_output_tokens: None,
            focus: 0,
            day_cursor: 0,
            export_dir: PathBuf::from("."),
            status,
        }
    }

    /// Replaces the export directory, keeping the rest of the state.
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// The form line currently focused.
    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    /// Applies one key press, reporting what the event loop should do next.
    pub fn handle_key(&mut self, key: KeyEvent) -> Signal {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('g') => {
                    if self.driver.is_none() {
                        self.status = messages::MISSING_KEY_NOTICE.to_string();
                        return Signal::Continue;
                    }
                    return Signal::Submit;
                }
                KeyCode::Char('e') => self.export(),
                _ => {}
            }
            return Signal::Continue;
        }

        match key.code {
            KeyCode::Esc => return Signal::Quit,
            KeyCode::Tab => {
                self.model = self.model.cycle();
                self.status = messages::model_header(self.model);
            }
            KeyCode::Up => {
                self.focus = (self.focus + FormField::ALL.len() - 1) % FormField::ALL.len();
            }
            KeyCode::Down => self.focus = (self.focus + 1) % FormField::ALL.len(),
            KeyCode::Left => self.nudge(-1),
            KeyCode::Right => self.nudge(1),
            KeyCode::Char(' ') => self.toggle_focused(),
            KeyCode::Backspace => self.erase_focused(),
            KeyCode::Char(c) => self.type_char(c),
            _ => {}
        }
        Signal::Continue
    }

    /// Switches the status line to the in-flight text so the event loop can
    /// draw one generating frame before awaiting the result.
    pub fn begin_generating(&mut self) {
        self.status = messages::generating_status(self.model);
    }

    /// Runs the generation pipeline for the survey as currently filled in.
    ///
    /// Sends the synthesized system+user pair (never prior history), records
    /// the pair in the transcript, and appends successful results to the
    /// plan log for export.
    pub async fn generate(&mut self) {
        let Some(driver) = &self.driver else {
            self.status = messages::MISSING_KEY_NOTICE.to_string();
            return;
        };

        self.transcript.push_user(self.survey.user_content());

        let options = GenerationOptions::default()
            .with_temperature(self.mode.temperature())
            .with_max_output_tokens(self.effective_max_tokens());
        let request =
            GenerationRequest::new(self.model.to_string(), self.survey.to_turns(), options);

        match driver.generate(&request).await {
            Ok(text) => {
                debug!(plans = self.plans.len() + 1, "Recording generated plan");
                self.transcript.push_assistant(text.clone());
                self.plans.push(PlanRecord::today(text));
                self.status = messages::PLAN_READY_STATUS.to_string();
            }
            Err(err) => {
                let message = messages::operator_message(&err);
                self.transcript.push_assistant(message.clone());
                self.status = message;
            }
        }
    }

    /// Writes the CSV export into the export directory, reporting the
    /// outcome in the status line.
    pub fn export(&mut self) {
        if self.plans.is_empty() {
            self.status = messages::EXPORT_EMPTY_NOTICE.to_string();
            return;
        }
        match export::write_export(&self.export_dir, &self.survey.facility, &self.plans) {
            Ok(path) => self.status = messages::export_done_status(&path),
            Err(err) => {
                warn!(error = %err, "Plan export failed");
                self.status = messages::export_failed_status(&err);
            }
        }
    }

    /// The token cap the next request will carry, treating zero as unset.
    pub fn effective_max_tokens(&self) -> Option<u32> {
        self.max_output_tokens.filter(|cap| *cap > 0)
    }

    /// The display value for one form line.
    pub fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::Facility => self.survey.facility.clone(),
            FormField::Manager => self.survey.manager.clone(),
            FormField::Date => self.survey.date.clone(),
            FormField::StaffCount => self.survey.staff_count.to_string(),
            FormField::AvgOvertime => format!("{:.1}", self.survey.avg_overtime_hours),
            FormField::PeakDays => self.peak_days_value(),
            FormField::ShiftHours => self.survey.shift_hours.to_string(),
            FormField::Cause => self.survey.cause.clone(),
            FormField::Intervention => self.survey.intervention.clone(),
            FormField::Constraints => self.survey.constraints.clone(),
            FormField::Horizon => self.survey.horizon.clone(),
            FormField::MaxProposals => self.survey.max_proposals.to_string(),
            FormField::Priority => self.survey.priority.clone(),
            FormField::Checklist => {
                let flag = if self.survey.include_checklist {
                    "はい"
                } else {
                    "いいえ"
                };
                flag.to_string()
            }
            FormField::Mode => self.mode.to_string(),
            FormField::MaxTokens => match self.effective_max_tokens() {
                Some(cap) => cap.to_string(),
                None => "制限なし".to_string(),
            },
        }
    }

    /// Renders the day line: every option marked selected or not, with the
    /// cursor bracketed while the line has focus.
    fn peak_days_value(&self) -> String {
        let editing = self.focused() == FormField::PeakDays;
        PEAK_DAY_OPTIONS
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let mark = if self.survey.peak_days.iter().any(|d| d.as_str() == *day) {
                    "●"
                } else {
                    "○"
                };
                if editing && i == self.day_cursor {
                    format!("[{mark}{day}]")
                } else {
                    format!("{mark}{day}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn type_char(&mut self, c: char) {
        match self.focused() {
            FormField::Facility => self.survey.facility.push(c),
            FormField::Manager => self.survey.manager.push(c),
            FormField::Date => self.survey.date.push(c),
            FormField::Cause => self.survey.cause.push(c),
            FormField::Intervention => self.survey.intervention.push(c),
            FormField::Constraints => self.survey.constraints.push(c),
            FormField::StaffCount => {
                if let Some(digit) = c.to_digit(10) {
                    self.survey.staff_count = append_digit(self.survey.staff_count, digit);
                }
            }
            FormField::ShiftHours => {
                if let Some(digit) = c.to_digit(10) {
                    self.survey.shift_hours = append_digit(self.survey.shift_hours, digit);
                }
            }
            FormField::MaxProposals => {
                if let Some(digit) = c.to_digit(10) {
                    self.survey.max_proposals = append_digit(self.survey.max_proposals, digit);
                }
            }
            FormField::MaxTokens => {
                if let Some(digit) = c.to_digit(10) {
                    let current = self.max_output_tokens.unwrap_or(0);
                    self.max_output_tokens = Some(append_digit(current, digit));
                }
            }
            _ => {}
        }
    }

    fn erase_focused(&mut self) {
        match self.focused() {
            FormField::Facility => {
                self.survey.facility.pop();
            }
            FormField::Manager => {
                self.survey.manager.pop();
            }
            FormField::Date => {
                self.survey.date.pop();
            }
            FormField::Cause => {
                self.survey.cause.pop();
            }
            FormField::Intervention => {
                self.survey.intervention.pop();
            }
            FormField::Constraints => {
                self.survey.constraints.pop();
            }
            FormField::StaffCount => self.survey.staff_count /= 10,
            FormField::ShiftHours => self.survey.shift_hours /= 10,
            FormField::MaxProposals => self.survey.max_proposals /= 10,
            FormField::MaxTokens => {
                self.max_output_tokens =
                    self.max_output_tokens.map(|cap| cap / 10).filter(|cap| *cap > 0);
            }
            _ => {}
        }
    }

    /// Applies a Left/Right step to the focused line.
    fn nudge(&mut self, step: i32) {
        match self.focused() {
            FormField::StaffCount => nudge_u32(&mut self.survey.staff_count, step),
            FormField::ShiftHours => nudge_u32(&mut self.survey.shift_hours, step),
            FormField::MaxProposals => nudge_u32(&mut self.survey.max_proposals, step),
            FormField::AvgOvertime => {
                let next = self.survey.avg_overtime_hours + 0.5 * step as f32;
                self.survey.avg_overtime_hours = next.max(0.0);
            }
            FormField::PeakDays => {
                let len = PEAK_DAY_OPTIONS.len() as i32;
                self.day_cursor = (self.day_cursor as i32 + step).rem_euclid(len) as usize;
            }
            FormField::Horizon => cycle_option(&mut self.survey.horizon, &HORIZON_OPTIONS, step),
            FormField::Priority => cycle_option(&mut self.survey.priority, &PRIORITY_OPTIONS, step),
            FormField::Checklist => {
                self.survey.include_checklist = !self.survey.include_checklist;
            }
            FormField::Mode => self.mode = self.mode.step(step),
            FormField::MaxTokens => {
                self.max_output_tokens = match (self.max_output_tokens, step >= 0) {
                    (None, true) => Some(TOKEN_START),
                    (None, false) => None,
                    (Some(cap), true) => Some(cap.saturating_add(TOKEN_STEP)),
                    (Some(cap), false) => cap.checked_sub(TOKEN_STEP).filter(|cap| *cap > 0),
                };
            }
            _ => {}
        }
    }

    /// Applies Space to the focused line: toggles days and the checklist
    /// flag, types an ordinary space everywhere else.
    fn toggle_focused(&mut self) {
        match self.focused() {
            FormField::PeakDays => self.survey.toggle_peak_day(PEAK_DAY_OPTIONS[self.day_cursor]),
            FormField::Checklist => {
                self.survey.include_checklist = !self.survey.include_checklist;
            }
            _ => self.type_char(' '),
        }
    }
}

fn append_digit(value: u32, digit: u32) -> u32 {
    value.saturating_mul(10).saturating_add(digit)
}

fn nudge_u32(value: &mut u32, step: i32) {
    *value = if step >= 0 {
        value.saturating_add(step as u32)
    } else {
        value.saturating_sub(step.unsigned_abs())
    };
}

fn cycle_option(value: &mut String, options: &[&str], step: i32) {
    let position = options
        .iter()
        .position(|option| *option == value.as_str())
        .unwrap_or(0) as i32;
    let next = (position + step).rem_euclid(options.len() as i32) as usize;
    *value = options[next].to_string();
}
