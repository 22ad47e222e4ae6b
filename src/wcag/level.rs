use std::fmt;

use serde::{Deserialize, Serialize};

/// WCAG 2.1 text-contrast conformance level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Enhanced contrast (ratio >= 7).
    #[serde(rename = "AAA")]
    Aaa,
    /// Minimum contrast for normal text (ratio >= 4.5).
    #[serde(rename = "AA")]
    Aa,
    /// Minimum contrast reached for large text only (ratio >= 3).
    #[serde(rename = "AA Large")]
    AaLarge,
    /// Below every threshold.
    #[serde(rename = "Fail")]
    Fail,
}

impl WcagLevel {
    /// Classify a contrast ratio, strongest level first.
    ///
    /// `is_large_text` applies the relaxed 3:1 floor for large text (at least
    /// 18pt, or 14pt bold).
    pub fn classify(ratio: f64, is_large_text: bool) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if is_large_text && ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
            Self::Fail => "Fail",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wcag/level.rs"]
mod tests;
