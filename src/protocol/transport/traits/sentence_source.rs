//! Minimal abstraction for an asynchronous line-oriented AIS feed. Allows the
//! router service to plug into various transports (UART, TCP relay, replay
//! file, test double).
use alloc::string::String;
use futures_util::Future;

/// Contract to pull raw NMEA sentences one at a time.
pub trait SentenceSource {
    type Error: core::fmt::Debug;
    /// Retrieve the next sentence, without its line terminator if possible.
    ///
    /// `Ok(None)` means the feed is closed and no more sentences will arrive.
    fn recv<'a>(&'a mut self) -> impl Future<Output = Result<Option<String>, Self::Error>> + 'a;
}
