//! Borrowed, allocation-free view over the fields of one AIVDM/AIVDO sentence.
//!
//! ```text
//! !AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E
//!   0    1 2 3 4 5                                                         6
//!   tag  | | | | payload                                                   padding
//!        | | | radio channel
//!        | | sequence identifier
//!        | fragment index
//!        fragment total
//! ```
use alloc::string::ToString;

use super::MAX_FRAGMENTS;
use crate::core::MAX_PADDING_BITS;
use crate::error::RouterError;
use crate::protocol::identifiers::identifier_of;

/// Number of comma-separated fields in an AIVDM/AIVDO sentence.
pub const FIELD_COUNT: usize = 7;

pub const TAG_FIELD: usize = 0;
pub const TOTAL_FIELD: usize = 1;
pub const INDEX_FIELD: usize = 2;
pub const SEQUENCE_ID_FIELD: usize = 3;
pub const CHANNEL_FIELD: usize = 4;
pub const PAYLOAD_FIELD: usize = 5;
pub const PADDING_FIELD: usize = 6;

/// Tokenized sentence. Fields beyond [`FIELD_COUNT`] are ignored.
#[derive(Debug, Clone, Copy)]
pub struct AisSentence<'a> {
    raw: &'a str,
    fields: [&'a str; FIELD_COUNT],
    len: usize,
}

impl<'a> AisSentence<'a> {
    /// Split `raw` on `,` once the `*HH` checksum suffix is removed.
    ///
    /// Tokenization never fails; missing fields surface when accessed.
    pub fn tokenize(raw: &'a str) -> Self {
        let body = match raw.rfind('*') {
            Some(star) => &raw[..star],
            None => raw,
        };

        let mut fields = [""; FIELD_COUNT];
        let mut len = 0;
        for (slot, field) in fields.iter_mut().zip(body.split(',')) {
            *slot = field;
            len += 1;
        }

        Self { raw, fields, len }
    }

    /// Sentence as received.
    #[inline]
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Number of fields found (capped at [`FIELD_COUNT`]).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether tokenization produced no field at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Field at `index`, if present.
    #[inline]
    pub fn field(&self, index: usize) -> Option<&'a str> {
        if index < self.len {
            Some(self.fields[index])
        } else {
            None
        }
    }

    /// Field at `index`, or [`RouterError::MissingField`].
    pub fn required(&self, index: usize) -> Result<&'a str, RouterError> {
        self.field(index).ok_or(RouterError::MissingField { index })
    }

    /// Talker + formatter identifier (`AIVD` for `!AIVDM`).
    pub fn identifier(&self) -> Option<&'a str> {
        self.field(TAG_FIELD).and_then(identifier_of)
    }

    /// Declared number of fragments, in `1..=MAX_FRAGMENTS`.
    pub fn total(&self) -> Result<u8, RouterError> {
        let value = self.required(TOTAL_FIELD)?;
        match value.parse::<u8>() {
            Ok(total) if (1..=MAX_FRAGMENTS).contains(&total) => Ok(total),
            _ => Err(RouterError::MalformedFragmentCount {
                value: value.to_string(),
            }),
        }
    }

    /// 1-based fragment index.
    ///
    /// Any decimal integer is accepted here, out of range values are left to
    /// the session continuity check.
    pub fn index(&self) -> Result<i32, RouterError> {
        let value = self.required(INDEX_FIELD)?;
        value
            .parse::<i32>()
            .map_err(|_| RouterError::MalformedFragmentIndex {
                value: value.to_string(),
            })
    }

    /// Sequential message identifier shared by the fragments of one message.
    /// Empty for single-sentence messages.
    #[inline]
    pub fn sequence_id(&self) -> &'a str {
        self.field(SEQUENCE_ID_FIELD).unwrap_or("")
    }

    /// Radio channel (`A`, `B`, `1`, `2` or empty).
    #[inline]
    pub fn channel(&self) -> &'a str {
        self.field(CHANNEL_FIELD).unwrap_or("")
    }

    /// Armored payload field.
    pub fn payload(&self) -> Result<&'a str, RouterError> {
        self.required(PAYLOAD_FIELD)
    }

    /// Fill bits from the first character of the padding field.
    ///
    /// A missing or empty field means no padding.
    pub fn padding(&self) -> Result<u8, RouterError> {
        let value = self.field(PADDING_FIELD).unwrap_or("");
        let Some(first) = value.bytes().next() else {
            return Ok(0);
        };

        match first {
            b'0'..=b'9' if first - b'0' <= MAX_PADDING_BITS => Ok(first - b'0'),
            _ => Err(RouterError::MalformedPadding {
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
