/// Test doubles to simulate the sentence feed and timer during integration tests.
use korri_ais::protocol::transport::traits::{korri_timer::KorriTimer, sentence_source::SentenceSource};
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

/// In-memory sentence feed reproducing the `SentenceSource` trait behavior.
/// Dropping the paired sender closes the feed.
pub struct MockSentenceSource {
    rx: mpsc::UnboundedReceiver<String>,
}

#[allow(dead_code)]
impl MockSentenceSource {
    /// Build a feed and the handle used by the test to push lines into it.
    pub fn create() -> (mpsc::UnboundedSender<String>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Build an already closed feed holding `lines`.
    pub fn preloaded(lines: &[&str]) -> Self {
        let (tx, source) = Self::create();
        for line in lines {
            tx.send(line.to_string()).expect("receiver alive");
        }
        source
    }
}

impl SentenceSource for MockSentenceSource {
    type Error = ();

    async fn recv(&mut self) -> Result<Option<String>, Self::Error> {
        Ok(self.rx.recv().await)
    }
}

/// Feed failing on the first receive.
#[allow(dead_code)]
pub struct BrokenSource;

impl SentenceSource for BrokenSource {
    type Error = &'static str;

    async fn recv(&mut self) -> Result<Option<String>, Self::Error> {
        Err("uart overrun")
    }
}

/// Timer based on `tokio::time::sleep` to drive delays in tests.
pub struct MockTimer;

impl KorriTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}
