//! WCAG 2.1 luminance, contrast-ratio, and conformance math.

pub(crate) mod contrast;
pub(crate) mod level;
pub(crate) mod luminance;
