use crate::color::hex::Rgb;
use crate::color::space::Hsl;
use crate::foundation::error::{TinctError, TinctResult};

/// Shift a hex color's lightness by a signed percentage.
///
/// Positive values lighten, negative values darken. The resulting lightness
/// is clamped into `[0, 100]`; hue and saturation are held fixed. Because the
/// hex and HSL round trips both round, `adjust(hex, 0.0)` can drift by at
/// most one per channel from the input.
#[tracing::instrument]
pub fn adjust(hex: &str, percent: f64) -> TinctResult<String> {
    if !percent.is_finite() {
        return Err(TinctError::validation(format!(
            "adjustment percent must be finite, got {percent}"
        )));
    }

    let rgb = Rgb::parse_hex(hex)?;
    let mut hsl = Hsl::from_rgb(rgb);
    hsl.l = (hsl.l + percent).clamp(0.0, 100.0);
    Ok(hsl.to_hex())
}

/// Lighten a hex color by `percent` points of lightness.
pub fn lighten(hex: &str, percent: f64) -> TinctResult<String> {
    adjust(hex, percent)
}

/// Darken a hex color by `percent` points of lightness.
pub fn darken(hex: &str, percent: f64) -> TinctResult<String> {
    adjust(hex, -percent)
}

#[cfg(test)]
#[path = "../../tests/unit/color/adjust.rs"]
mod tests;
