//! Staffing survey, plan log, and CSV export for nightingale.
//!
//! The planner front-end owns a [`StaffingSurvey`] it edits in place, turns
//! it into a system+user turn pair per generation, collects results in a
//! [`PlanLog`], and exports the log with [`export::write_export`].

pub mod export;
mod plan;
mod survey;

pub use plan::{PlanLog, PlanRecord};
pub use survey::{
    CreativityMode, HORIZON_OPTIONS, PEAK_DAY_OPTIONS, PRIORITY_OPTIONS, SYSTEM_PREAMBLE,
    StaffingSurvey,
};
