//! NMEA 0183 checksum: XOR of every byte between the start delimiter
//! (`!` or `$`) and `*`, transmitted as two hexadecimal digits.

/// Start delimiters accepted in front of the talker identifier.
pub const START_DELIMITERS: [u8; 2] = [b'!', b'$'];

/// XOR every byte of `body` (delimiters excluded).
#[inline]
pub fn compute(body: &str) -> u8 {
    body.bytes().fold(0u8, |acc, byte| acc ^ byte)
}

/// Split a sentence into its checksummed body and the declared checksum.
///
/// Returns `None` when the start delimiter, the `*` separator, or the two hex
/// digits are missing, or when anything follows them.
pub fn split(sentence: &str) -> Option<(&str, u8)> {
    let first = *sentence.as_bytes().first()?;
    if !START_DELIMITERS.contains(&first) {
        return None;
    }

    let star = sentence.rfind('*')?;
    let digits = &sentence[star + 1..];
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let declared = u8::from_str_radix(digits, 16).ok()?;

    Some((&sentence[1..star], declared))
}

/// Verify the trailing `*HH` of a raw sentence.
pub fn verify(sentence: &str) -> bool {
    match split(sentence) {
        Some((body, declared)) => compute(body) == declared,
        None => false,
    }
}
