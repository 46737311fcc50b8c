//! Infrastructure layer: text-level codecs with no knowledge of sessions.
pub mod codec;
