//! Typed festival records exchanged between the calendar backend and its
//! script front-end, with a validating decoder and a lossless encoder.

pub mod codec;
pub mod error;
pub mod record;
pub mod render;

pub use codec::{
    DecodeOptions, DecodePolicy, RawPayload, decode, decode_with, encode, encode_to_string,
};
pub use error::DecodeError;
pub use record::{Festival, FestivalKind};
