//! Streaming media player.
//!
//! Acquires the welcome video over HTTP and reports playback lifecycle
//! events. Playback here is progressive consumption of the byte stream: the
//! session is loaded once the response arrives and finished when the stream
//! ends. Each `start` opens a fresh session; a generation counter keeps
//! torn-down sessions from emitting late events.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use wg_core::media::{MediaEvent, MediaSource};
use wg_core::ports::{MediaError, MediaPlayerPort};

const EVENT_CHANNEL_CAPACITY: usize = 16;

type SharedEventSender = Arc<Mutex<Option<mpsc::Sender<MediaEvent>>>>;

pub struct StreamingMediaPlayer {
    client: reqwest::Client,
    events_tx: SharedEventSender,
    generation: Arc<AtomicU64>,
}

impl StreamingMediaPlayer {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            events_tx: Arc::new(Mutex::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    async fn emit(
        events_tx: &SharedEventSender,
        generation: &AtomicU64,
        session: u64,
        event: MediaEvent,
    ) {
        if generation.load(Ordering::SeqCst) != session {
            debug!(?event, session, "dropping event from torn-down media session");
            return;
        }
        let guard = events_tx.lock().await;
        if let Some(tx) = guard.as_ref() {
            if tx.send(event).await.is_err() {
                debug!("media event receiver dropped");
            }
        }
    }

    async fn run_session(
        client: reqwest::Client,
        source: MediaSource,
        events_tx: SharedEventSender,
        generation: Arc<AtomicU64>,
        session: u64,
    ) {
        let mut loaded_emitted = false;
        loop {
            let result = Self::stream_once(
                &client,
                &source,
                &events_tx,
                &generation,
                session,
                &mut loaded_emitted,
            )
            .await;

            match result {
                Ok(()) => {
                    if generation.load(Ordering::SeqCst) != session {
                        return;
                    }
                    if source.looped {
                        debug!(url = %source.url, session, "looping media session restarting");
                        continue;
                    }
                    Self::emit(&events_tx, &generation, session, MediaEvent::Finished).await;
                    return;
                }
                Err(err) => {
                    warn!(error = %err, url = %source.url, session, "media session error");
                    Self::emit(
                        &events_tx,
                        &generation,
                        session,
                        MediaEvent::Error {
                            reason: err.to_string(),
                        },
                    )
                    .await;
                    return;
                }
            }
        }
    }

    async fn stream_once(
        client: &reqwest::Client,
        source: &MediaSource,
        events_tx: &SharedEventSender,
        generation: &AtomicU64,
        session: u64,
        loaded_emitted: &mut bool,
    ) -> Result<(), MediaError> {
        let response = client
            .get(&source.url)
            .send()
            .await
            .map_err(|e| MediaError::Connect(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::Status(status.as_u16()));
        }

        if !*loaded_emitted {
            Self::emit(events_tx, generation, session, MediaEvent::Loaded).await;
            *loaded_emitted = true;
        }

        let mut total_bytes: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| MediaError::Stream(e.to_string()))?;
            total_bytes += chunk.len() as u64;
            if generation.load(Ordering::SeqCst) != session {
                // Torn down mid-stream. Stop consuming quietly.
                return Ok(());
            }
        }

        debug!(url = %source.url, session, total_bytes, "media stream completed");
        Ok(())
    }
}

impl Default for StreamingMediaPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaPlayerPort for StreamingMediaPlayer {
    async fn start(&self, source: &MediaSource) -> Result<(), MediaError> {
        let session = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(url = %source.url, session, "starting media session");

        tokio::spawn(Self::run_session(
            self.client.clone(),
            source.clone(),
            Arc::clone(&self.events_tx),
            Arc::clone(&self.generation),
            session,
        ));

        Ok(())
    }

    async fn subscribe_events(&self) -> anyhow::Result<mpsc::Receiver<MediaEvent>> {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        *self.events_tx.lock().await = Some(tx);
        Ok(rx)
    }

    async fn teardown(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.events_tx.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Duration};

    fn source(url: String, looped: bool) -> MediaSource {
        MediaSource {
            url,
            muted: true,
            looped,
            autoplay: true,
        }
    }

    async fn next_event(events: &mut mpsc::Receiver<MediaEvent>) -> MediaEvent {
        timeout(Duration::from_secs(5), events.recv())
            .await
            .expect("timed out waiting for media event")
            .expect("event channel closed")
    }

    #[tokio::test]
    async fn emits_loaded_then_finished_for_non_looping_session() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/welcome.mp4")
            .with_status(200)
            .with_body(vec![0u8; 4096])
            .create_async()
            .await;

        let player = StreamingMediaPlayer::new();
        let mut events = player.subscribe_events().await.unwrap();
        player
            .start(&source(format!("{}/welcome.mp4", server.url()), false))
            .await
            .unwrap();

        assert_eq!(next_event(&mut events).await, MediaEvent::Loaded);
        assert_eq!(next_event(&mut events).await, MediaEvent::Finished);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn emits_error_without_loaded_on_failure_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/welcome.mp4")
            .with_status(404)
            .create_async()
            .await;

        let player = StreamingMediaPlayer::new();
        let mut events = player.subscribe_events().await.unwrap();
        player
            .start(&source(format!("{}/welcome.mp4", server.url()), false))
            .await
            .unwrap();

        match next_event(&mut events).await {
            MediaEvent::Error { reason } => {
                assert!(reason.contains("404"), "unexpected reason: {reason}")
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn emits_error_when_server_is_unreachable() {
        let url = {
            let server = mockito::Server::new_async().await;
            format!("{}/welcome.mp4", server.url())
            // Server is dropped here, closing the listener.
        };

        let player = StreamingMediaPlayer::new();
        let mut events = player.subscribe_events().await.unwrap();
        player.start(&source(url, false)).await.unwrap();

        match next_event(&mut events).await {
            MediaEvent::Error { .. } => {}
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn looping_session_does_not_finish() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/loop.mp4")
            .with_status(200)
            .with_body("frames")
            .expect_at_least(2)
            .create_async()
            .await;

        let player = StreamingMediaPlayer::new();
        let mut events = player.subscribe_events().await.unwrap();
        player
            .start(&source(format!("{}/loop.mp4", server.url()), true))
            .await
            .unwrap();

        assert_eq!(next_event(&mut events).await, MediaEvent::Loaded);

        // The session keeps restarting instead of finishing.
        let quiet = timeout(Duration::from_millis(500), events.recv()).await;
        assert!(quiet.is_err(), "looping session must not emit Finished");

        mock.assert_async().await;
        player.teardown().await;
    }

    #[tokio::test]
    async fn each_start_opens_a_fresh_session() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/flaky.mp4")
            .with_status(500)
            .expect(2)
            .create_async()
            .await;

        let player = StreamingMediaPlayer::new();
        let mut events = player.subscribe_events().await.unwrap();
        let src = source(format!("{}/flaky.mp4", server.url()), false);

        player.start(&src).await.unwrap();
        assert!(matches!(
            next_event(&mut events).await,
            MediaEvent::Error { .. }
        ));

        player.start(&src).await.unwrap();
        assert!(matches!(
            next_event(&mut events).await,
            MediaEvent::Error { .. }
        ));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn stale_sessions_do_not_emit() {
        let player = StreamingMediaPlayer::new();
        let mut events = player.subscribe_events().await.unwrap();

        let stale_session = player.generation.fetch_add(1, Ordering::SeqCst);
        StreamingMediaPlayer::emit(
            &player.events_tx,
            &player.generation,
            stale_session,
            MediaEvent::Finished,
        )
        .await;

        let quiet = timeout(Duration::from_millis(100), events.recv()).await;
        assert!(quiet.is_err(), "stale session event must be dropped");
    }
}
