//! AIS sentence protocol: identifier filtering, sentence transport and
//! fragment sessions, and the router tying them together.
pub mod identifiers;
pub mod router;
pub mod transport;
