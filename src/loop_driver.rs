use std::time::{Duration, Instant};

use crate::game::{EndReason, Engine, GameState, TickResult};

/// A single-use tick scheduled for `due`.
///
/// Each schedule gets a fresh token; [`LoopDriver::fire`] consumes the handle
/// and only accepts the token most recently handed out by
/// [`LoopDriver::take_due`].
#[derive(Debug, Eq, PartialEq)]
pub struct ScheduledTick {
    due: Instant,
    token: u64,
}

/// What happened when a scheduled tick fired.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoopEvent {
    Ticked,
    Finished { final_score: u32, reason: EndReason },
}

/// Fixed-interval scheduler owning the engine and the single "is running" flag.
///
/// At most one tick is scheduled or in flight at any time. Stopping, pausing
/// or game over clears both slots, so a handle taken earlier fires as a no-op.
#[derive(Debug)]
pub struct LoopDriver {
    engine: Engine,
    interval: Duration,
    running: bool,
    next_token: u64,
    scheduled: Option<ScheduledTick>,
    in_flight: Option<u64>,
}

impl LoopDriver {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        let interval = engine.config().tick_interval;
        Self {
            engine,
            interval,
            running: false,
            next_token: 0,
            scheduled: None,
            in_flight: None,
        }
    }

    /// Resets the game and starts ticking. No-op while already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.running {
            return false;
        }

        self.engine.reset();
        self.running = true;
        self.schedule(now + self.interval);
        tracing::info!(interval = ?self.interval, "loop started");
        true
    }

    /// Suspends ticking without touching game state.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.cancel();
        tracing::debug!("loop paused");
        true
    }

    /// Resumes a paused game. Has no effect unless the game itself is still running.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.running || !self.engine.state().is_running() {
            return false;
        }

        self.running = true;
        self.schedule(now + self.interval);
        tracing::debug!("loop resumed");
        true
    }

    /// Stops ticking; any outstanding handle becomes stale.
    pub fn stop(&mut self) {
        self.cancel();
    }

    /// Returns true while ticks are being scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true when the loop is halted but the game can be resumed.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        !self.running && self.engine.state().is_running()
    }

    /// Takes the scheduled tick if it is due at `now`.
    ///
    /// Nothing new is scheduled until the returned handle is fired.
    pub fn take_due(&mut self, now: Instant) -> Option<ScheduledTick> {
        if !self.scheduled.as_ref().is_some_and(|tick| now >= tick.due) {
            return None;
        }

        let tick = self.scheduled.take()?;
        self.in_flight = Some(tick.token);
        Some(tick)
    }

    /// Runs one tick followed by `render`, unless the handle has gone stale.
    pub fn fire<F>(&mut self, tick: ScheduledTick, now: Instant, mut render: F) -> Option<LoopEvent>
    where
        F: FnMut(&GameState),
    {
        if !self.running || self.in_flight != Some(tick.token) {
            tracing::debug!(token = tick.token, "dropping stale tick");
            return None;
        }
        self.in_flight = None;

        let finished = match self.engine.tick() {
            TickResult::Continued(_) => None,
            TickResult::GameOver {
                final_score,
                reason,
            } => Some(LoopEvent::Finished {
                final_score,
                reason,
            }),
        };

        render(self.engine.state());

        if let Some(event) = finished {
            self.cancel();
            return Some(event);
        }

        // Keep a fixed cadence; skip deadlines that have already passed.
        let mut next = tick.due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.schedule(next);

        Some(LoopEvent::Ticked)
    }

    /// Fires the scheduled tick if it is due, passing the new state to `render`.
    pub fn poll<F>(&mut self, now: Instant, render: F) -> Option<LoopEvent>
    where
        F: FnMut(&GameState),
    {
        let tick = self.take_due(now)?;
        self.fire(tick, now, render)
    }

    /// Returns how long until the next scheduled tick, if any.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.scheduled
            .as_ref()
            .map(|tick| tick.due.saturating_duration_since(now))
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Mutable engine access for forwarding direction intents.
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn schedule(&mut self, due: Instant) {
        let token = self.next_token;
        self.next_token += 1;
        self.scheduled = Some(ScheduledTick { due, token });
    }

    fn cancel(&mut self) {
        self.running = false;
        self.scheduled = None;
        self.in_flight = None;
    }
}
