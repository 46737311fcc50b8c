//! Fragment session: state of the multi-sentence message currently being
//! reassembled on one AIS channel.
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::sentence::AisSentence;

//==================================================================================Enums and Structs
/// Possible states for a reassembly session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    Inactive,
    InProgress,
}

/// Payload handed back once the last fragment has been integrated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPayload {
    /// Concatenated payload fields, in fragment order.
    pub payload: String,
    /// Raw sentences the payload was built from.
    pub fragments: Vec<String>,
}

/// Tracks one in-progress multi-sentence message.
#[derive(Debug, Clone)]
pub struct FragmentSession {
    state: SessionState,
    expected_index: u8,
    total_fragments: u8,
    sequence_id: String,
    payload: String,
    raw_cache: Vec<String>,
}

impl Default for FragmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentSession {
    /// Create a session in the inactive state.
    pub const fn new() -> Self {
        Self {
            state: SessionState::Inactive,
            expected_index: 1,
            total_fragments: 0,
            sequence_id: String::new(),
            payload: String::new(),
            raw_cache: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::InProgress
    }

    /// Next fragment index the session will accept.
    #[inline]
    pub fn expected_index(&self) -> u8 {
        self.expected_index
    }

    /// Declared fragment total (0 while inactive).
    #[inline]
    pub fn total_fragments(&self) -> u8 {
        self.total_fragments
    }

    #[inline]
    pub fn sequence_id(&self) -> &str {
        &self.sequence_id
    }

    /// Payload accumulated so far.
    #[inline]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Raw sentences integrated so far.
    #[inline]
    pub fn raw_cache(&self) -> &[String] {
        &self.raw_cache
    }

    /// Check whether a fragment continues this session.
    ///
    /// An inactive session only accepts index 1, whatever its identifier or
    /// total. An active one requires the next index, the same sequence
    /// identifier and the same declared total.
    pub fn continues(&self, index: i32, total: u8, sequence_id: &str) -> bool {
        if index != i32::from(self.expected_index) {
            return false;
        }
        match self.state {
            SessionState::Inactive => true,
            SessionState::InProgress => {
                sequence_id == self.sequence_id && total == self.total_fragments
            }
        }
    }

    /// Integrate a fragment already checked with [`FragmentSession::continues`],
    /// so its index is the expected one.
    pub fn push(&mut self, sentence: &AisSentence<'_>, total: u8, payload: &str) {
        if self.expected_index == 1 {
            // First fragment in sequence: record size and identifier.
            self.state = SessionState::InProgress;
            self.total_fragments = total;
            self.sequence_id = sentence.sequence_id().to_string();
        }

        self.payload.push_str(payload);
        self.raw_cache.push(sentence.raw().to_string());
        self.expected_index = self.expected_index.saturating_add(1);
    }

    /// Checks whether every declared fragment has been integrated.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.is_active() && self.expected_index - 1 == self.total_fragments
    }

    /// Hand back the reassembled payload and release the session.
    pub fn finish(&mut self) -> CompletedPayload {
        let completed = CompletedPayload {
            payload: core::mem::take(&mut self.payload),
            fragments: core::mem::take(&mut self.raw_cache),
        };
        self.reset();
        completed
    }

    /// Release the session and return the raw sentences it was holding.
    pub fn abandon(&mut self) -> Vec<String> {
        let fragments = core::mem::take(&mut self.raw_cache);
        self.reset();
        fragments
    }

    /// Reset the session and make it available again.
    pub fn reset(&mut self) {
        self.state = SessionState::Inactive;
        self.expected_index = 1;
        self.total_fragments = 0;
        self.sequence_id.clear();
        self.payload.clear();
        self.raw_cache.clear();
    }
}
