//! Shared error taxonomy underpinning the color APIs.

pub(crate) mod error;
