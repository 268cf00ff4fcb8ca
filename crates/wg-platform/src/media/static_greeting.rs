//! Static greeting player.
//!
//! Degraded welcome presentation for targets that cannot play inline video:
//! the session reports loaded and finished immediately so the flow advances
//! past the gate without any media acquisition.

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use wg_core::media::{MediaEvent, MediaSource};
use wg_core::ports::{MediaError, MediaPlayerPort};

const EVENT_CHANNEL_CAPACITY: usize = 16;

pub struct StaticGreetingPlayer {
    events_tx: Mutex<Option<mpsc::Sender<MediaEvent>>>,
}

impl StaticGreetingPlayer {
    pub fn new() -> Self {
        Self {
            events_tx: Mutex::new(None),
        }
    }
}

impl Default for StaticGreetingPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaPlayerPort for StaticGreetingPlayer {
    async fn start(&self, source: &MediaSource) -> Result<(), MediaError> {
        debug!(url = %source.url, "static greeting session, skipping media acquisition");
        let guard = self.events_tx.lock().await;
        if let Some(tx) = guard.as_ref() {
            let _ = tx.send(MediaEvent::Loaded).await;
            let _ = tx.send(MediaEvent::Finished).await;
        }
        Ok(())
    }

    async fn subscribe_events(&self) -> anyhow::Result<mpsc::Receiver<MediaEvent>> {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        *self.events_tx.lock().await = Some(tx);
        Ok(rx)
    }

    async fn teardown(&self) {
        self.events_tx.lock().await.take();
    }
}
