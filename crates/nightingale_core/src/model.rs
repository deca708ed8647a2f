//! Selectable Gemini model identifiers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// The Gemini models offered in the front-end selectors.
///
/// The `Display` output is the exact model segment used in the
/// `generateContent` URL.
///
/// # Examples
///
/// ```
/// use nightingale_core::ModelChoice;
///
/// assert_eq!(ModelChoice::Flash.to_string(), "gemini-2.5-flash");
/// assert_eq!(ModelChoice::Pro.to_string(), "gemini-2.5-pro");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, Display, EnumIter,
)]
pub enum ModelChoice {
    /// Fast, low-latency model suited to interactive chat
    #[default]
    #[strum(serialize = "gemini-2.5-flash")]
    Flash,
    /// Higher-quality model for longer-form generation
    #[strum(serialize = "gemini-2.5-pro")]
    Pro,
}

impl ModelChoice {
    /// Advances to the next model in selector order, wrapping at the end.
    pub fn cycle(self) -> Self {
        let mut iter = ModelChoice::iter().cycle();
        iter.find(|choice| *choice == self);
        iter.next().unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_names_match_api_segments() {
        assert_eq!(ModelChoice::Flash.to_string(), "gemini-2.5-flash");
        assert_eq!(ModelChoice::Pro.to_string(), "gemini-2.5-pro");
    }

    #[test]
    fn test_cycle_wraps_around() {
        assert_eq!(ModelChoice::Flash.cycle(), ModelChoice::Pro);
        assert_eq!(ModelChoice::Pro.cycle(), ModelChoice::Flash);
    }

    #[test]
    fn test_default_is_flash() {
        assert_eq!(ModelChoice::default(), ModelChoice::Flash);
    }
}
