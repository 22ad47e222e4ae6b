use serde::Serialize;

use crate::color::hex::Rgb;
use crate::wcag::level::WcagLevel;
use crate::wcag::luminance::relative_luminance;

/// WCAG 2.1 contrast ratio between two colors.
///
/// Always in `[1, 21]` and symmetric in its arguments: the lighter luminance
/// goes in the numerator regardless of order.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio of a foreground/background pair together with the
/// conformance levels it earns for normal and large text.
///
/// This is the row shape the token catalog's accessibility tables render.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Contrast ratio in `[1, 21]`.
    pub ratio: f64,
    /// Conformance level for normal-size text.
    pub normal: WcagLevel,
    /// Conformance level for large text (at least 18pt, or 14pt bold).
    pub large: WcagLevel,
}

impl ContrastReport {
    /// Evaluate a foreground/background pair.
    pub fn evaluate(fg: Rgb, bg: Rgb) -> Self {
        let ratio = contrast_ratio(fg, bg);
        Self {
            ratio,
            normal: WcagLevel::classify(ratio, false),
            large: WcagLevel::classify(ratio, true),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wcag/contrast.rs"]
mod tests;
