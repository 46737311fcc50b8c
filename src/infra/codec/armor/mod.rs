//! AIS payload armoring: every printable character of the payload field
//! carries six bits. This module de-armors characters, classifies the message
//! type and exposes a bit reader for higher-level message decoders.
use crate::error::PayloadError;

/// Number of bits carried by one armored character.
pub const BITS_PER_CHAR: usize = 6;

/// Decode one armored character into its 6-bit value.
///
/// Valid characters are `'0'..='W'` (values 0 to 39) and `` '`'..='w' ``
/// (values 40 to 63).
#[inline]
pub fn decode_char(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'W' => Some(c - 48),
        b'`'..=b'w' => Some(c - 56),
        _ => None,
    }
}

/// Check that every payload character belongs to the armoring alphabet.
pub fn validate(payload: &str) -> Result<(), PayloadError> {
    match payload
        .char_indices()
        .find(|(_, c)| !c.is_ascii() || decode_char(*c as u8).is_none())
    {
        Some((position, character)) => Err(PayloadError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// AIS message type: the first six bits of the payload.
pub fn message_type(payload: &str) -> Result<u8, PayloadError> {
    let mut reader = ArmoredReader::new(payload)?;
    reader.read_u8(6)
}

/// Message type from the leading character only, without validating the
/// rest of the payload. An empty payload or a foreign leading character
/// gives 0, which no AIS message uses.
#[inline]
pub fn leading_message_type(payload: &str) -> u8 {
    payload.bytes().next().and_then(decode_char).unwrap_or(0)
}

/// MSB-first bit reader over an armored payload.
///
/// The payload is validated once at construction, reads never allocate.
pub struct ArmoredReader<'a> {
    /// Armored characters (ASCII only once validated).
    symbols: &'a [u8],
    /// Number of readable bits (padding excluded).
    bit_len: usize,
    /// Current index expressed as number of bits read from the beginning.
    bit_cursor: usize,
}

impl<'a> ArmoredReader<'a> {
    /// Create a reader over the whole payload (no padding).
    pub fn new(payload: &'a str) -> Result<Self, PayloadError> {
        Self::with_padding(payload, 0)
    }

    /// Create a reader ignoring the last `padding` fill bits.
    pub fn with_padding(payload: &'a str, padding: u8) -> Result<Self, PayloadError> {
        if payload.is_empty() {
            return Err(PayloadError::Empty);
        }
        validate(payload)?;

        Ok(Self {
            symbols: payload.as_bytes(),
            bit_len: (payload.len() * BITS_PER_CHAR).saturating_sub(padding as usize),
            bit_cursor: 0,
        })
    }

    /// Bits left before the end of the payload.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bit_len - self.bit_cursor
    }

    /// Read `num_bits` bits starting at the current cursor and return a `u64`.
    /// `num_bits` must stay in the [1, 64] range.
    pub fn read_u64(&mut self, num_bits: u8) -> Result<u64, PayloadError> {
        if !(1..=64).contains(&num_bits) {
            return Err(PayloadError::TooLongForType {
                max: 64,
                asked: num_bits,
            });
        }

        if self.bit_cursor + num_bits as usize > self.bit_len {
            return Err(PayloadError::OutOfBounds {
                asked: num_bits as usize,
                available: self.remaining(),
            });
        }

        let mut result: u64 = 0;
        let mut bits_read = 0usize;

        while bits_read < num_bits as usize {
            let position = self.bit_cursor + bits_read;
            let symbol_index = position / BITS_PER_CHAR;
            let bit_offset = position % BITS_PER_CHAR;

            let symbol = self.symbols[symbol_index];
            let value = decode_char(symbol).ok_or(PayloadError::InvalidCharacter {
                character: symbol as char,
                position: symbol_index,
            })?;

            // Bits still unread in this symbol, high bits first.
            let available = BITS_PER_CHAR - bit_offset;
            let take = available.min(num_bits as usize - bits_read);
            let mask = (1u8 << take) - 1;
            let chunk = (value >> (available - take)) & mask;

            result = (result << take) | chunk as u64;
            bits_read += take;
        }

        self.bit_cursor += num_bits as usize;
        Ok(result)
    }

    /// Read up to 8 bits and return a `u8`.
    pub fn read_u8(&mut self, num_bits: u8) -> Result<u8, PayloadError> {
        if num_bits > 8 {
            return Err(PayloadError::TooLongForType {
                max: 8,
                asked: num_bits,
            });
        }

        self.read_u64(num_bits).map(|val| val as u8)
    }

    /// Read up to 16 bits and return a `u16`.
    pub fn read_u16(&mut self, num_bits: u8) -> Result<u16, PayloadError> {
        if num_bits > 16 {
            return Err(PayloadError::TooLongForType {
                max: 16,
                asked: num_bits,
            });
        }

        self.read_u64(num_bits).map(|val| val as u16)
    }

    /// Read up to 32 bits and return a `u32`.
    pub fn read_u32(&mut self, num_bits: u8) -> Result<u32, PayloadError> {
        if num_bits > 32 {
            return Err(PayloadError::TooLongForType {
                max: 32,
                asked: num_bits,
            });
        }

        self.read_u64(num_bits).map(|val| val as u32)
    }

    /// Read a single bit as a flag.
    pub fn read_bool(&mut self) -> Result<bool, PayloadError> {
        self.read_u64(1).map(|val| val == 1)
    }

    /// Advance the cursor by `length` bits without reading data.
    pub fn advance(&mut self, length: usize) -> Result<(), PayloadError> {
        if length > self.remaining() {
            return Err(PayloadError::OutOfBounds {
                asked: length,
                available: self.remaining(),
            });
        }
        self.bit_cursor += length;

        Ok(())
    }
}
