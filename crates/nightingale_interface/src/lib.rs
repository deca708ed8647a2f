//! Trait definitions for the nightingale Gemini front-ends.
//!
//! The front-ends depend on [`TextGenerator`] rather than on a concrete
//! client, which lets tests substitute a scripted generator and keeps the
//! HTTP stack out of the UI crates.

mod generator;

pub use generator::TextGenerator;
