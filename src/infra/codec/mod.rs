//! Codecs for the two encodings stacked in an AIS sentence: the NMEA 0183
//! frame checksum and the 6-bit armoring of the payload field.
pub mod armor;
pub mod checksum;
