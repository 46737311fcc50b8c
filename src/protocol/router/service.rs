//! Router service built on top of [`Router`].
//!
//! It keeps the router fed from a [`SentenceSource`] and publishes every
//! [`RouterEvent`] into a caller-provided [`embassy_sync::channel::Channel`]:
//!
//! * a pending session is abandoned after the configured idle timeout;
//! * closing the source flushes the pending session and ends the stream with
//!   [`RouterEvent::EndOfStream`].
//!
//! The channel mutex is generic so firmware can pick
//! `CriticalSectionRawMutex` while single-task hosts use `NoopRawMutex`.

use alloc::string::String;
use core::fmt::Debug;

use embassy_sync::{
    blocking_mutex::raw::RawMutex,
    channel::{Channel, Receiver},
};
use futures_util::{future::select, future::Either, pin_mut};

use super::{Router, RouterEvent};
use crate::error::RouterRunError;
use crate::protocol::transport::traits::{korri_timer::KorriTimer, sentence_source::SentenceSource};

/// Service assembling the router, its input and its output channel.
pub struct RouterService<'a, S, T, M, const CAP: usize>
where
    S: SentenceSource,
    T: KorriTimer,
    M: RawMutex,
{
    router: Router,
    source: S,
    timer: T,
    events: &'a Channel<M, RouterEvent, CAP>,
}

impl<'a, S, T, M, const CAP: usize> RouterService<'a, S, T, M, CAP>
where
    S: SentenceSource,
    T: KorriTimer,
    M: RawMutex,
{
    pub fn new(router: Router, source: S, timer: T, events: &'a Channel<M, RouterEvent, CAP>) -> Self {
        Self {
            router,
            source,
            timer,
            events,
        }
    }

    /// Split into event receiver and runner.
    pub fn into_parts(self) -> RouterServiceParts<'a, S, T, M, CAP> {
        RouterServiceParts {
            events: RouterEvents {
                receiver: self.events.receiver(),
            },
            runner: RouterRunner {
                router: self.router,
                source: self.source,
                timer: self.timer,
                events: self.events,
            },
        }
    }
}

/// Bundle returned by [`RouterService::into_parts`].
pub struct RouterServiceParts<'a, S, T, M, const CAP: usize>
where
    S: SentenceSource,
    T: KorriTimer,
    M: RawMutex,
{
    pub events: RouterEvents<'a, M, CAP>,
    pub runner: RouterRunner<'a, S, T, M, CAP>,
}

/// Receiving side of the event channel.
pub struct RouterEvents<'a, M: RawMutex, const CAP: usize> {
    receiver: Receiver<'a, M, RouterEvent, CAP>,
}

impl<'a, M: RawMutex, const CAP: usize> RouterEvents<'a, M, CAP> {
    pub async fn recv(&mut self) -> RouterEvent {
        self.receiver.receive().await
    }

    /// Next event if one is already queued.
    pub fn try_recv(&mut self) -> Option<RouterEvent> {
        self.receiver.try_receive().ok()
    }
}

/// Outcome of one wait on the source.
enum Next<E> {
    Received(Result<Option<String>, E>),
    Idle,
}

/// Runner that drives the service loop.
pub struct RouterRunner<'a, S, T, M, const CAP: usize>
where
    S: SentenceSource,
    T: KorriTimer,
    M: RawMutex,
{
    router: Router,
    source: S,
    timer: T,
    events: &'a Channel<M, RouterEvent, CAP>,
}

impl<'a, S, T, M, const CAP: usize> RouterRunner<'a, S, T, M, CAP>
where
    S: SentenceSource,
    S::Error: Debug,
    T: KorriTimer,
    M: RawMutex,
{
    /// Pump sentences until the source closes.
    ///
    /// `SentenceSource::recv` must be cancel-safe: when the idle timeout
    /// fires the pending receive is dropped.
    pub async fn drive(mut self) -> Result<(), RouterRunError<S::Error>> {
        loop {
            let idle_timeout = match self.router.config().idle_timeout_ms {
                Some(millis) if self.router.is_pending() => Some(millis),
                _ => None,
            };

            let next = {
                let recv = self.source.recv();
                pin_mut!(recv);

                match idle_timeout {
                    Some(millis) => {
                        let timeout = self.timer.delay_ms(millis);
                        pin_mut!(timeout);

                        match select(recv, timeout).await {
                            Either::Left((result, _)) => Next::Received(result),
                            Either::Right(_) => Next::Idle,
                        }
                    }
                    None => Next::Received(recv.await),
                }
            };

            match next {
                Next::Received(Ok(Some(line))) => {
                    for event in self.router.route(&line) {
                        self.events.send(event).await;
                    }
                }
                Next::Received(Ok(None)) => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("sentence source closed");

                    self.router.abandon_pending();
                    self.flush_abandoned().await;
                    self.events.send(RouterEvent::EndOfStream).await;
                    return Ok(());
                }
                Next::Received(Err(err)) => return Err(RouterRunError::Receive(err)),
                Next::Idle => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("idle timeout, dropping pending session");

                    self.router.abandon_pending();
                    self.flush_abandoned().await;
                }
            }
        }
    }

    async fn flush_abandoned(&mut self) {
        for failed in self.router.take_abandoned() {
            self.events.send(RouterEvent::Failed(failed)).await;
        }
    }
}
