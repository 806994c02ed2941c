//! Record layer: the typed festival value and its raw boundary shape.
//!
//! This module does no parsing of text. It owns:
//! - Festival (validated, immutable record)
//! - RawFestival (serde-friendly shape + validation)

pub mod festival;
pub mod raw;

pub use festival::{Festival, FestivalKind, NONE_NAME};
pub use raw::{DecodePolicy, FIELDS, RawFestival};
