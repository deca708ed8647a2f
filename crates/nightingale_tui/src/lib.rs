//! Terminal front-ends for Nightingale.
//!
//! Two screens share one pattern: an app struct generic over
//! [`nightingale_interface::TextGenerator`] owns the session state, `ui`
//! draws it, and `runner` owns the terminal lifecycle and event loop.
//! Both apps accept a missing driver and stay usable, showing the
//! configuration notice instead of generating.

pub mod chat;
pub mod messages;
pub mod planner;
pub mod runner;
pub mod ui;

#[cfg(test)]
mod support;

pub use chat::ChatApp;
pub use planner::{FormField, PlanApp};
pub use runner::{Signal, run_chat, run_plan};
