use crate::foundation::error::{TinctError, TinctResult};

/// An opaque sRGB color with 8-bit integer channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
}

impl Rgb {
    /// Build a color from explicit channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rgb` or `#rrggbb` hex literal.
    ///
    /// Digits are case-insensitive and the leading `#` is optional. In the
    /// shorthand form each digit stands for its doubled byte, so `"#F30"`
    /// parses the same as `"#FF3300"`.
    pub fn parse_hex(s: &str) -> TinctResult<Self> {
        let t = s.trim();
        let t = t.strip_prefix('#').unwrap_or(t);
        // from_str_radix tolerates a leading '+'; only bare hex digits are
        // valid here. This also keeps the fixed-offset slicing below on char
        // boundaries for non-ASCII input.
        if t.is_empty() || !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TinctError::parse(format!("invalid hex color {s:?}")));
        }

        fn hex_byte(pair: &str) -> TinctResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| TinctError::parse(format!("invalid hex byte \"{pair}\"")))
        }

        fn hex_nibble(digit: &str) -> TinctResult<u8> {
            u8::from_str_radix(digit, 16)
                .map_err(|_| TinctError::parse(format!("invalid hex digit \"{digit}\"")))
        }

        let (r, g, b) = match t.len() {
            3 => {
                // Shorthand: `f` means `ff`, i.e. nibble * 0x11.
                let r = hex_nibble(&t[0..1])? * 17;
                let g = hex_nibble(&t[1..2])? * 17;
                let b = hex_nibble(&t[2..3])? * 17;
                (r, g, b)
            }
            6 => {
                let r = hex_byte(&t[0..2])?;
                let g = hex_byte(&t[2..4])?;
                let b = hex_byte(&t[4..6])?;
                (r, g, b)
            }
            _ => {
                return Err(TinctError::parse(
                    "hex color must be #rgb or #rrggbb (case-insensitive)",
                ));
            }
        };

        Ok(Self { r, g, b })
    }

    /// Format as a 7-character lowercase `#rrggbb` literal.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hex.rs"]
mod tests;
