//! Abstraction traits used by the transport layer (sentence source and timer).
pub mod korri_timer;
pub mod sentence_source;
