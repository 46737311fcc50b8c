//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (sentence validation, fragment
//! sequencing, payload armoring, service loop).
use alloc::string::String;
use thiserror_no_std::Error;

//==================================================================================ROUTER_ERROR
#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Reasons a sentence is rejected by the router.
///
/// The `Display` strings are stable and short so that downstream logging or
/// metrics can key on them without re-parsing the sentence.
pub enum RouterError {
    /// Nothing left once the line terminator is stripped.
    #[error("empty line")]
    EmptyInput,
    /// The trailing `*HH` does not match the XOR of the sentence body.
    #[error("checksum failed")]
    ChecksumMismatch,
    /// Talker + formatter is not part of the AIS identifier set.
    #[error("sentence isn't AIVDM/AIVDO")]
    UnrecognizedIdentifier,
    /// The sentence stops before a mandatory field.
    #[error("missing field {index}")]
    MissingField { index: usize },
    /// Declared fragment total is not a number in `1..=MAX_FRAGMENTS`.
    #[error("invalid fragment count: {value}")]
    MalformedFragmentCount { value: String },
    /// Fragment index is not numeric.
    #[error("here: {value}")]
    MalformedFragmentIndex { value: String },
    /// Fragment does not continue the active session (index, sequence id or
    /// declared total mismatch).
    #[error("incomplete/out of order span sentence")]
    OutOfOrderFragment,
    /// Padding field is not a digit in `0..=5`.
    #[error("invalid padding: {value}")]
    MalformedPadding { value: String },
    /// Fragment session dropped before completion (forced reset or end of stream).
    #[error("incomplete span sentence")]
    IncompleteSession,
    /// Payload contains characters outside the AIS 6-bit alphabet.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] PayloadError),
}

//==================================================================================PAYLOAD_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised while de-armoring or reading an AIS payload.
pub enum PayloadError {
    /// No character to classify.
    #[error("empty payload")]
    Empty,
    /// Character outside `'0'..='W'` and `'`'..='w'`.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    /// Attempted to read past the last payload bit.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Requested more bits than the target type can hold.
    #[error("Cannot read more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
}

//==================================================================================SERVICE_ERROR
#[derive(Error, Debug)]
/// Errors ending the router service loop.
pub enum RouterRunError<E: core::fmt::Debug> {
    /// The sentence source failed.
    #[error("sentence source receive error: {0:?}")]
    Receive(E),
}
