//! Color value types: hex parsing, HSL conversion, lightness adjustment.

pub(crate) mod adjust;
pub(crate) mod hex;
pub(crate) mod serde_repr;
pub(crate) mod space;
