//! Staffing survey form state and prompt assembly.

use chrono::Local;
use nightingale_core::{Role, Turn};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Shift options for the overtime multi-select: the seven weekdays plus
/// night duty.
pub const PEAK_DAY_OPTIONS: [&str; 8] = ["月", "火", "水", "木", "金", "土", "日", "夜勤"];

/// Planning horizon options.
pub const HORIZON_OPTIONS: [&str; 3] = ["1ヶ月", "3ヶ月", "6ヶ月"];

/// Priority options weighing cost against effect.
pub const PRIORITY_OPTIONS: [&str; 3] = ["コスト重視", "バランス", "効果重視"];

/// Fixed system preamble sent ahead of the survey block.
pub const SYSTEM_PREAMBLE: &str = "あなたは看護管理者を支援する勤務計画の専門家です。\
与えられた職場情報を分析し、残業時間を削減するための具体的な行動計画を提案してください。";

/// Sampling presets selectable on the planner form.
///
/// Each mode fixes the temperature; top-p is not affected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, Display, EnumIter,
)]
pub enum CreativityMode {
    /// Conservative output for reproducible plans
    #[strum(serialize = "精度重視")]
    Precise,
    /// The chat default
    #[default]
    #[strum(serialize = "バランス")]
    Balanced,
    /// Wider sampling for brainstorming
    #[strum(serialize = "創造性重視")]
    Creative,
}

impl CreativityMode {
    /// The temperature this mode applies.
    pub fn temperature(&self) -> f32 {
        match self {
            CreativityMode::Precise => 0.3,
            CreativityMode::Balanced => 0.7,
            CreativityMode::Creative => 0.9,
        }
    }

    /// Steps to a neighboring mode in selector order, wrapping at the ends.
    pub fn step(self, step: i32) -> Self {
        let modes: Vec<Self> = Self::iter().collect();
        let position = modes.iter().position(|mode| *mode == self).unwrap_or(0) as i32;
        let next = (position + step).rem_euclid(modes.len() as i32) as usize;
        modes[next]
    }
}

/// One filled-in staffing survey.
///
/// The fields mirror the form top to bottom. Prompt assembly renders each
/// as one `label: value` line in that same order, so the model sees the
/// form the way the operator filled it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingSurvey {
    /// Department or ward name
    pub facility: String,
    /// Person filling in the form
    pub manager: String,
    /// Survey date, `%Y-%m-%d`
    pub date: String,
    /// Number of nurses on the roster
    pub staff_count: u32,
    /// Average monthly overtime per nurse, in hours
    pub avg_overtime_hours: f32,
    /// Shifts with the most overtime, drawn from [`PEAK_DAY_OPTIONS`]
    pub peak_days: Vec<String>,
    /// Length of one shift, in hours
    pub shift_hours: u32,
    /// Free text: main causes of overtime
    pub cause: String,
    /// Free text: measures already taken
    pub intervention: String,
    /// Free text: constraints on new measures
    pub constraints: String,
    /// Planning horizon, drawn from [`HORIZON_OPTIONS`]
    pub horizon: String,
    /// Maximum number of proposals to request
    pub max_proposals: u32,
    /// Priority, drawn from [`PRIORITY_OPTIONS`]
    pub priority: String,
    /// Whether to request an implementation checklist
    pub include_checklist: bool,
}

impl Default for StaffingSurvey {
    fn default() -> Self {
        Self {
            facility: String::new(),
            manager: String::new(),
            date: Local::now().format("%Y-%m-%d").to_string(),
            staff_count: 10,
            avg_overtime_hours: 8.0,
            peak_days: Vec::new(),
            shift_hours: 8,
            cause: String::new(),
            intervention: String::new(),
            constraints: String::new(),
            horizon: "3ヶ月".to_string(),
            max_proposals: 3,
            priority: "バランス".to_string(),
            include_checklist: true,
        }
    }
}

impl StaffingSurvey {
    /// Renders the survey as the labeled block sent as user content.
    ///
    /// One line per field, fixed order, values untouched apart from the
    /// multi-select join. An empty multi-select still renders its label.
    pub fn user_content(&self) -> String {
        let lines = [
            format!("部署: {}", self.facility),
            format!("担当者: {}", self.manager),
            format!("記入日: {}", self.date),
            format!("看護師数: {}", self.staff_count),
            format!("平均残業時間: {:.1}", self.avg_overtime_hours),
            format!("残業の多いシフト: {}", self.peak_days.join(", ")),
            format!("1シフトの長さ: {}", self.shift_hours),
            format!("主な原因: {}", self.cause),
            format!("実施済みの対策: {}", self.intervention),
            format!("制約条件: {}", self.constraints),
            format!("計画期間: {}", self.horizon),
            format!("提案数の上限: {}", self.max_proposals),
            format!("優先方針: {}", self.priority),
            format!(
                "チェックリストを含める: {}",
                if self.include_checklist {
                    "はい"
                } else {
                    "いいえ"
                }
            ),
        ];
        lines.join("\n")
    }

    /// Builds the system+user turn pair the planner submits.
    pub fn to_turns(&self) -> Vec<Turn> {
        vec![
            Turn::new(Role::System, SYSTEM_PREAMBLE.to_string()),
            Turn::new(Role::User, self.user_content()),
        ]
    }

    /// Toggles one peak-day option in or out of the selection, keeping
    /// the selection in option order.
    pub fn toggle_peak_day(&mut self, day: &str) {
        if let Some(pos) = self.peak_days.iter().position(|d| d == day) {
            self.peak_days.remove(pos);
        } else if PEAK_DAY_OPTIONS.contains(&day) {
            self.peak_days.push(day.to_string());
            self.peak_days.sort_by_key(|d| {
                PEAK_DAY_OPTIONS
                    .iter()
                    .position(|option| option == d)
                    .unwrap_or(PEAK_DAY_OPTIONS.len())
            });
        }
    }
}
