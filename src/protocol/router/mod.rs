//! AIS sentence router: validates raw NMEA sentences and reassembles the
//! payloads spanning several of them.
//!
//! Each call to [`Router::process`] consumes one sentence and yields one of:
//! a complete [`Message`], a rejection ([`RouterError`]), or nothing while a
//! multi-sentence message is still incomplete.
//!
//! ```rust
//! use korri_ais::protocol::router::Router;
//!
//! let mut router = Router::new();
//! let first = "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E";
//! let last = "!AIVDM,2,2,3,B,1@0000000000000,2*55";
//!
//! assert_eq!(router.process(first), Ok(None));
//! let message = router.process(last).unwrap().unwrap();
//! assert_eq!(message.message_type, 5);
//! assert_eq!(message.padding, 2);
//! ```
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::core::{FailedSentence, Message};
use crate::error::RouterError;
use crate::infra::codec::{armor, checksum};
use crate::protocol::identifiers::is_ais_identifier;
use crate::protocol::transport::sentence::AisSentence;
use crate::protocol::transport::session::FragmentSession;

pub mod config;
pub mod service;

use config::{PaddingPolicy, RouterConfig};

//==================================================================================Enums and Structs
/// Everything a router reports, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    /// A payload is complete.
    Message(Message),
    /// A sentence was rejected or abandoned.
    Failed(FailedSentence),
    /// The sentence feed is closed; nothing follows.
    EndOfStream,
}

impl RouterEvent {
    /// Map onto the legacy outcome where end of stream is an in-band
    /// [`Message`] of type 255.
    pub fn into_legacy(self) -> Result<Message, FailedSentence> {
        match self {
            RouterEvent::Message(message) => Ok(message),
            RouterEvent::Failed(failed) => Err(failed),
            RouterEvent::EndOfStream => Ok(Message::end_of_stream()),
        }
    }
}

/// Sequential sentence processor for one AIS channel.
///
/// Holds at most one fragment session. Feeding sentences from several
/// receivers through the same router breaks reassembly: use one router per
/// source.
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
    session: FragmentSession,
    /// Fragments abandoned by the last call, waiting to be reported.
    abandoned: Vec<FailedSentence>,
}

impl Router {
    /// Instantiate a router with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::new())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            session: FragmentSession::new(),
            abandoned: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Checks whether a multi-sentence message is waiting for more fragments.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.session.is_active()
    }

    /// Raw sentences of the pending message.
    #[inline]
    pub fn pending_fragments(&self) -> &[String] {
        self.session.raw_cache()
    }

    //==================================================================================Process Functions
    /// Process one raw sentence.
    ///
    /// Returns `Ok(Some(message))` when a payload is complete, `Ok(None)` when
    /// the sentence was integrated into a pending multi-sentence message, and
    /// `Err` when it was rejected. Fragments of a session abandoned by this
    /// call are queued until the next call, see [`Router::take_abandoned`].
    pub fn process(&mut self, sentence: &str) -> Result<Option<Message>, RouterError> {
        self.drop_stale_abandoned();

        let raw = trim_line(sentence);
        if raw.is_empty() {
            return Err(RouterError::EmptyInput);
        }

        // Nothing below may touch the session before these two checks pass.
        if !checksum::verify(raw) {
            return Err(RouterError::ChecksumMismatch);
        }

        let sentence = AisSentence::tokenize(raw);
        match sentence.identifier() {
            Some(identifier) if is_ais_identifier(identifier) => {}
            _ => return Err(RouterError::UnrecognizedIdentifier),
        }

        let payload = sentence.payload()?;
        let total = sentence.total()?;

        if total == 1 {
            // One sentence message, process it immediately.
            return Ok(Some(self.process_single(&sentence, payload)));
        }

        self.process_fragment(&sentence, total, payload)
    }

    /// Process one raw sentence and report every consequence as events.
    ///
    /// Fragments abandoned by this sentence come first, then the outcome of
    /// the sentence itself. A pending fragment yields no event.
    pub fn route(&mut self, sentence: &str) -> Vec<RouterEvent> {
        let outcome = self.process(sentence);

        let mut events: Vec<RouterEvent> = self
            .take_abandoned()
            .into_iter()
            .map(RouterEvent::Failed)
            .collect();

        match outcome {
            Ok(Some(message)) => events.push(RouterEvent::Message(message)),
            Ok(None) => {}
            Err(issue) => events.push(RouterEvent::Failed(FailedSentence::new(
                trim_line(sentence),
                issue,
            ))),
        }

        events
    }

    /// Drain the fragments abandoned by the last call to [`Router::process`]
    /// or [`Router::abandon_pending`].
    ///
    /// The queue only spans one call: entries not taken before the next call
    /// are discarded, so it never holds more than `MAX_FRAGMENTS` sentences.
    pub fn take_abandoned(&mut self) -> Vec<FailedSentence> {
        core::mem::take(&mut self.abandoned)
    }

    /// Drop the pending session, queueing its fragments as incomplete.
    ///
    /// Used when the tail of a message will never come (idle timeout, end of
    /// stream). No-op without a pending session.
    pub fn abandon_pending(&mut self) {
        self.drop_stale_abandoned();
        self.abandon_session(RouterError::IncompleteSession);
    }

    //==================================================================================Internals
    /// A sentence that made it here always yields a message: malformed fill
    /// bits read as 0 and the type comes from the leading character alone.
    fn process_single(&self, sentence: &AisSentence<'_>, payload: &str) -> Message {
        let padding = match self.config.single_sentence_padding {
            PaddingPolicy::Parse => sentence.padding().unwrap_or_else(|_issue| {
                #[cfg(feature = "defmt")]
                defmt::debug!("malformed single sentence padding, using 0");
                0
            }),
            PaddingPolicy::AssumeZero => 0,
        };
        let message_type = armor::leading_message_type(payload);

        #[cfg(feature = "defmt")]
        defmt::trace!("single sentence message, type {}", message_type);

        Message {
            message_type,
            payload: payload.to_string(),
            padding,
        }
    }

    fn process_fragment(
        &mut self,
        sentence: &AisSentence<'_>,
        total: u8,
        payload: &str,
    ) -> Result<Option<Message>, RouterError> {
        let index = sentence.index()?;

        if !self.session.continues(index, total, sentence.sequence_id()) {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "fragment {}/{} breaks session (expected index {})",
                index,
                total,
                self.session.expected_index()
            );

            self.abandon_session(RouterError::OutOfOrderFragment);
            if index != 1 {
                // The current one is invalid too.
                return Err(RouterError::OutOfOrderFragment);
            }
        }

        self.session.push(sentence, total, payload);

        if !self.session.is_complete() {
            return Ok(None);
        }

        // Last fragment in sequence: release the session whatever happens next.
        let completed = self.session.finish();
        let classified = sentence
            .padding()
            .and_then(|padding| Ok((armor::message_type(&completed.payload)?, padding)));

        match classified {
            Ok((message_type, padding)) => {
                #[cfg(feature = "defmt")]
                defmt::trace!(
                    "reassembled {} fragments, type {}",
                    completed.fragments.len(),
                    message_type
                );

                Ok(Some(Message {
                    message_type,
                    payload: completed.payload,
                    padding,
                }))
            }
            Err(issue) => {
                // The last fragment is reported by the caller, queue the others.
                let earlier = completed.fragments.len().saturating_sub(1);
                self.abandoned.extend(
                    completed
                        .fragments
                        .into_iter()
                        .take(earlier)
                        .map(|raw| FailedSentence::new(raw, issue.clone())),
                );
                Err(issue)
            }
        }
    }

    fn drop_stale_abandoned(&mut self) {
        if !self.abandoned.is_empty() {
            #[cfg(feature = "defmt")]
            defmt::debug!("discarding {} unreported fragment(s)", self.abandoned.len());

            self.abandoned.clear();
        }
    }

    fn abandon_session(&mut self, issue: RouterError) {
        if !self.session.is_active() {
            return;
        }

        let fragments = self.session.abandon();

        #[cfg(feature = "defmt")]
        defmt::warn!("abandoning {} fragment(s)", fragments.len());

        self.abandoned.extend(
            fragments
                .into_iter()
                .map(|raw| FailedSentence::new(raw, issue.clone())),
        );
    }
}

/// Strip the NMEA line terminator.
#[inline]
fn trim_line(sentence: &str) -> &str {
    sentence.trim_end_matches(|c: char| c == '\r' || c == '\n')
}
