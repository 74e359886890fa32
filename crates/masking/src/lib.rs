#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Protection for card data and gateway credentials. Wrapper types keep secrets out of
//! `Debug` output, and the [`scrub`] module strips sensitive values from form-encoded
//! request bodies before they reach a log line.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub use zeroize::{self, DefaultIsZeroes, Zeroize as ZeroizableSecret};

mod strategy;
pub use strategy::{Strategy, WithType, WithoutType};

mod abs;
pub use abs::{ExposeInterface, ExposeOptionInterface, PeekInterface};

mod secret;
mod strong_secret;
pub use secret::Secret;
pub use strong_secret::StrongSecret;

mod serde;
pub use crate::serde::SerializableSecret;

mod string;

pub mod scrub;
pub use scrub::{FormScrubber, RedactionRule};

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, ExposeOptionInterface, PeekInterface};
}
