//! Defines the "data contract" between the router and its callers.
//!
//! The router produces [`Message`] values when a payload is complete and
//! [`FailedSentence`] values for every sentence it could not integrate.
//! Both own their text: nothing borrows from the router's internal state.
use alloc::string::{String, ToString};

use crate::error::{PayloadError, RouterError};
use crate::infra::codec::armor::ArmoredReader;

/// Highest fill-bit count allowed in the last payload character.
pub const MAX_PADDING_BITS: u8 = 5;

/// Fully reassembled AIS payload, ready for a 6-bit message decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// AIS message type decoded from the first payload character.
    pub message_type: u8,
    /// Armored payload (concatenation of every fragment's payload field).
    pub payload: String,
    /// Fill bits appended to the last character (0 to 5).
    pub padding: u8,
}

impl Message {
    /// Message type historically used as an in-band end-of-stream marker.
    pub const END_OF_STREAM_TYPE: u8 = 255;

    /// Legacy sentinel emitted once no more sentences will arrive.
    pub fn end_of_stream() -> Self {
        Self {
            message_type: Self::END_OF_STREAM_TYPE,
            payload: String::new(),
            padding: 0,
        }
    }

    /// Checks whether this value is the legacy end-of-stream sentinel.
    #[inline]
    pub fn is_end_of_stream(&self) -> bool {
        self.message_type == Self::END_OF_STREAM_TYPE && self.payload.is_empty()
    }

    /// Number of meaningful payload bits (six per character minus padding).
    #[inline]
    pub fn bit_len(&self) -> usize {
        (self.payload.len() * 6).saturating_sub(self.padding as usize)
    }

    /// Bit reader over the armored payload, bounded by [`Message::bit_len`].
    pub fn reader(&self) -> Result<ArmoredReader<'_>, PayloadError> {
        ArmoredReader::with_padding(&self.payload, self.padding)
    }
}

/// Sentence that could not be validated or integrated, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedSentence {
    /// Raw sentence as received.
    pub sentence: String,
    /// Why it was rejected.
    pub issue: RouterError,
}

impl FailedSentence {
    pub fn new(sentence: impl Into<String>, issue: RouterError) -> Self {
        Self {
            sentence: sentence.into(),
            issue,
        }
    }

    /// Human-readable reason, identical to the `Display` of [`FailedSentence::issue`].
    pub fn issue_text(&self) -> String {
        self.issue.to_string()
    }
}
