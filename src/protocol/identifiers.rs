//! Talker + formatter prefixes of the NMEA sentences carrying AIS payloads.
//!
//! The four characters following the start delimiter (`!AIVDM` → `AIVD`)
//! identify the talker (AI, AB, BS…) and the VDM/VDO formatter family.

/// Recognized AIS identifiers, sorted for binary search.
pub static AIS_IDENTIFIERS: [&str; 10] = [
    "ABVD", // NMEA 4.0 base AIS station
    "ADVD", // NMEA 4.0 dependent AIS base station
    "AIVD", // Mobile AIS station
    "ANVD", // NMEA 4.0 aid to navigation AIS station
    "ARVD", // NMEA 4.0 AIS receiving station
    "ASVD", // NMEA 4.0 limited base station
    "ATVD", // NMEA 4.0 AIS transmitting station
    "AXVD", // NMEA 4.0 repeater AIS station
    "BSVD", // Base AIS station (deprecated in NMEA 4.0)
    "SAVD", // NMEA 4.0 physical shore AIS station
];

/// Checks whether `identifier` (exactly four characters) is an AIS one.
#[inline]
pub fn is_ais_identifier(identifier: &str) -> bool {
    AIS_IDENTIFIERS.binary_search(&identifier).is_ok()
}

/// Extract the identifier from a sentence tag such as `!AIVDM` or `$AIVDO`.
///
/// Returns `None` when the start delimiter is missing or the tag is too short.
pub fn identifier_of(tag: &str) -> Option<&str> {
    let rest = tag.strip_prefix('!').or_else(|| tag.strip_prefix('$'))?;
    rest.get(..4)
}
