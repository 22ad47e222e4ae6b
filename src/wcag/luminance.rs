use crate::color::hex::Rgb;

/// Convert one 8-bit sRGB channel to its linear-light value.
///
/// sRGB -> linear per WCAG 2.1: `v/12.92` below the 0.03928 threshold,
/// `((v+0.055)/1.055)^2.4` above it.
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.1.
///
/// Returns a value in `[0, 1]`: 0.0 for black, ~1.0 for white. The channel
/// weights (`0.2126 R + 0.7152 G + 0.0722 B`) and linearization constants are
/// the ones fixed by the guideline; changing any of them shifts
/// conformance-level results.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

#[cfg(test)]
#[path = "../../tests/unit/wcag/luminance.rs"]
mod tests;
