//! Core data types for the nightingale Gemini front-ends.
//!
//! This crate provides the foundation data types shared by both front-ends:
//! conversation roles and turns, the session transcript, generation request
//! types, and the model selector.

mod model;
mod request;
mod role;
mod transcript;
mod turn;

pub use model::ModelChoice;
pub use request::{GenerationOptions, GenerationRequest};
pub use role::Role;
pub use transcript::Transcript;
pub use turn::Turn;
