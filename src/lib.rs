//! Tinct is a stateless color-math library for design-token pipelines.
//!
//! It covers the arithmetic a component catalog needs to render swatches and
//! accessibility tables:
//!
//! - Parse and format `#rgb` / `#rrggbb` token colors ([`Rgb`])
//! - WCAG 2.1 relative luminance and contrast ratio
//! - Conformance-level classification ([`WcagLevel`], [`ContrastReport`])
//! - Lightness-based adjustment through HSL ([`adjust`], [`lighten`], [`darken`])
//!
//! Every operation is a pure function over small value types: no I/O, no
//! caching, no shared state. Calls are independently re-entrant and safe from
//! any number of threads.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod foundation;
mod wcag;

pub use crate::color::adjust::{adjust, darken, lighten};
pub use crate::color::hex::Rgb;
pub use crate::color::space::Hsl;
pub use crate::foundation::error::{TinctError, TinctResult};
pub use crate::wcag::contrast::{ContrastReport, contrast_ratio};
pub use crate::wcag::level::WcagLevel;
pub use crate::wcag::luminance::relative_luminance;
