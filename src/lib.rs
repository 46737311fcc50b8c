//! `korri-ais` library: validation and reassembly of AIS radio sentences
//! carried over NMEA 0183 framing, in a `no_std` + `alloc` environment. The
//! crate exposes the infrastructure modules (checksum, 6-bit payload armor),
//! the protocol logic (identifier filter, sentence tokenizer, fragment
//! session, router) and an async service pumping sentences into a channel.
#![no_std]
//==================================================================================
extern crate alloc;
//==================================================================================
/// Data types handed to callers: reassembled messages and failed sentences.
pub mod core;
/// Router, payload and service errors.
pub mod error;
/// Low-level codecs: NMEA 0183 checksum and AIS payload armoring.
pub mod infra;
/// AIS sentence protocol: identifiers, transport (sentence, fragment session,
/// async traits) and the router itself.
pub mod protocol;
//==================================================================================
