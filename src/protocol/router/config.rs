//! Runtime knobs of the router.

/// How single-sentence messages report their fill bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaddingPolicy {
    /// Read the padding field like the last fragment of a multi-part message.
    #[default]
    Parse,
    /// Always report 0 for single-sentence messages, ignoring the field.
    AssumeZero,
}

/// Router configuration.
///
/// ```rust
/// use korri_ais::protocol::router::config::{PaddingPolicy, RouterConfig};
///
/// let config = RouterConfig::new()
///     .with_single_sentence_padding(PaddingPolicy::AssumeZero)
///     .with_idle_timeout_ms(1_000);
/// assert_eq!(config.idle_timeout_ms, Some(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouterConfig {
    /// Padding handling for messages that fit in one sentence.
    pub single_sentence_padding: PaddingPolicy,
    /// Idle delay after which the service abandons a pending session.
    /// `None` keeps a pending session forever.
    pub idle_timeout_ms: Option<u32>,
}

impl RouterConfig {
    pub const fn new() -> Self {
        Self {
            single_sentence_padding: PaddingPolicy::Parse,
            idle_timeout_ms: None,
        }
    }

    pub fn with_single_sentence_padding(mut self, policy: PaddingPolicy) -> Self {
        self.single_sentence_padding = policy;
        self
    }

    /// Abandon pending sessions after `millis` without a new sentence.
    ///
    /// See [`DEFAULT_IDLE_TIMEOUT_MS`](crate::protocol::transport::DEFAULT_IDLE_TIMEOUT_MS)
    /// for a reasonable value.
    pub fn with_idle_timeout_ms(mut self, millis: u32) -> Self {
        self.idle_timeout_ms = Some(millis);
        self
    }
}
