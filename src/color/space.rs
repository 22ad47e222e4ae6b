use crate::color::hex::Rgb;

/// A color in hue/saturation/lightness form.
///
/// Hue is an angle in degrees, `[0, 360)` when produced by [`Hsl::from_rgb`];
/// saturation and lightness are percentages in `[0, 100]`. Conversion back to
/// RGB normalizes out-of-range inputs (hue wraps modulo 360, saturation and
/// lightness clamp).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation percentage.
    pub s: f64,
    /// Lightness percentage.
    pub l: f64,
}

impl Hsl {
    /// Convert an 8-bit RGB color to HSL.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, kept at 0.
            return Self {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let mut h = if r == max {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if g == max {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;

        Self {
            h: h * 360.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Convert back to 8-bit RGB, rounding each channel.
    pub fn to_rgb(self) -> Rgb {
        let h = (self.h % 360.0 + 360.0) % 360.0 / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        if s == 0.0 {
            let v = to_u8(l);
            return Rgb::new(v, v, v);
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        Rgb::new(
            to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_u8(hue_to_rgb(p, q, h)),
            to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Format as a lowercase `#rrggbb` literal.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/space.rs"]
mod tests;
