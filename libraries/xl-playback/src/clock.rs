//! Simulated progress clock
//!
//! A single cancelable tokio task ticks the manager once per period while
//! playback is running on an embeddable source. [`PlaybackSession`] owns the
//! clock and restarts it on every transition that can change `is_playing`
//! or the current track, so at most one clock ever exists.
//!
//! ```text
//! play_track / next / previous / toggle_play / select_source
//!         │
//!         ▼
//!   abort old task ──► clock_should_run()? ──► spawn interval loop
//!                                                 │ lock, tick()
//!                                                 └─ exits when playback stops
//! ```

use crate::{
    error::Result,
    events::PlaybackEvent,
    manager::PlaybackManager,
    types::{PlaybackSnapshot, TickOutcome},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use xl_core::Track;

/// Default tick period
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Handle to the repeating tick task
#[derive(Debug)]
pub struct ProgressClock {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl ProgressClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
        }
    }

    /// Cancel any running task and start a new one
    ///
    /// The first tick fires one full period after the call.
    pub fn start(&mut self, manager: Arc<Mutex<PlaybackManager>>) {
        self.stop();

        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let mut manager = manager.lock().await;
                if manager.tick() == TickOutcome::TrackEnded {
                    tracing::debug!(
                        track = ?manager.current_track().map(|t| &t.id),
                        "Clock reached end of track"
                    );
                }
                if !manager.clock_should_run() {
                    break;
                }
            }
            tracing::trace!("Progress clock stopped");
        }));
    }

    /// Cancel the running task, if any
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Default for ProgressClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

impl Drop for ProgressClock {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Playback manager plus its clock
///
/// Transitions that affect the clock go through here so the clock is
/// restarted or stopped in the same step. The old clock is stopped before
/// the transition, so a tick queued on the lock never lands on the new
/// track. Requires a tokio runtime.
#[derive(Debug)]
pub struct PlaybackSession {
    manager: Arc<Mutex<PlaybackManager>>,
    clock: ProgressClock,
}

impl PlaybackSession {
    pub fn new(manager: PlaybackManager, tick: Duration) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
            clock: ProgressClock::new(tick),
        }
    }

    /// Shared handle to the manager
    pub fn manager(&self) -> Arc<Mutex<PlaybackManager>> {
        Arc::clone(&self.manager)
    }

    pub async fn play_track(&mut self, track: Track, context: Option<Vec<Track>>) {
        self.clock.stop();
        self.manager.lock().await.play_track(track, context);
        self.sync_clock().await;
    }

    pub async fn toggle_play(&mut self) {
        self.clock.stop();
        self.manager.lock().await.toggle_play();
        self.sync_clock().await;
    }

    pub async fn next(&mut self) {
        self.clock.stop();
        self.manager.lock().await.next();
        self.sync_clock().await;
    }

    pub async fn previous(&mut self) {
        self.clock.stop();
        self.manager.lock().await.previous();
        self.sync_clock().await;
    }

    pub async fn select_source(&mut self, index: usize) -> Result<()> {
        self.clock.stop();
        let result = self.manager.lock().await.select_source(index);
        self.sync_clock().await;
        result
    }

    pub async fn toggle_shuffle(&mut self) {
        self.manager.lock().await.toggle_shuffle();
    }

    pub async fn cycle_repeat_mode(&mut self) {
        self.manager.lock().await.cycle_repeat_mode();
    }

    pub async fn seek(&mut self, secs: u32) -> Result<()> {
        self.manager.lock().await.seek(secs)
    }

    pub async fn snapshot(&self) -> PlaybackSnapshot {
        self.manager.lock().await.snapshot()
    }

    pub async fn drain_events(&self) -> Vec<PlaybackEvent> {
        self.manager.lock().await.drain_events()
    }

    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Stop the clock; the manager keeps its state
    pub fn shutdown(&mut self) {
        self.clock.stop();
    }

    async fn sync_clock(&mut self) {
        let should_run = self.manager.lock().await.clock_should_run();
        if should_run {
            self.clock.start(Arc::clone(&self.manager));
        } else {
            self.clock.stop();
        }
    }
}
