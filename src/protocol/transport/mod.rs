//! AIS transport layer: sentence tokenization, multi-sentence fragment
//! sessions, and the async abstraction traits feeding the router.
//!
//! ## Transport Constants
//!
//! These constants bound what the router accepts from a single AIS channel.

pub mod sentence;
pub mod session;
pub mod traits;

/// Highest fragment count a sentence may declare.
///
/// The total and index fields are single decimal digits in IEC 61162-1, so
/// nothing above nine can be expressed by a compliant transceiver. In practice
/// AIS messages never span more than five sentences.
pub const MAX_FRAGMENTS: u8 = 9;

/// Suggested idle delay before a pending fragment session is abandoned (ms).
///
/// Fragments of one message are transmitted back to back in the same slot
/// sequence; a gap of a few seconds means the tail was lost on air.
///
/// # Recommended Values
///
/// - **1000 ms**: live serial feed from a single transceiver.
/// - **5000 ms**: network feeds with buffering (TCP/UDP relays).
pub const DEFAULT_IDLE_TIMEOUT_MS: u32 = 5_000;
