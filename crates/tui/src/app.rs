//! Countdown state machine and run loop.
//!
//! This module provides the [`Countdown`] struct which owns the remaining
//! seconds and drives the once-per-second render loop.
//!
//! # Tick
//!
//! Each tick draws the current frame, sleeps for one tick interval, counts
//! down by one second, then polls for a cancelling key. Keys are therefore
//! observed with up to one interval of latency. Only an interrupt signal
//! preempts the sleep.
//!
//! Once the countdown ends, keys are checked every [`KEY_WAIT_INTERVAL`]
//! until one is pressed. The interrupt signal still ends the run during
//! that wait.

use std::io;
use std::time::Duration;

use countdown_protocol::{CountdownRequest, DisplayMode, Message};
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, info};

use crate::event::KeySource;
use crate::widgets::{CountdownFrame, render_countdown};

/// Interval between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Interval between two key checks while waiting for the final key press.
pub const KEY_WAIT_INTERVAL: Duration = Duration::from_millis(50);

/// Where the countdown is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Still counting down.
    Running,
    /// Reached zero.
    Expired,
    /// Stopped early with Escape or `q`.
    Cancelled,
    /// Stopped by Ctrl+C or SIGINT.
    Interrupted,
}

impl Phase {
    /// Returns whether the countdown is still running.
    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

/// The countdown application.
///
/// The display mode is chosen once from the initial total and never
/// re-evaluated, so a days countdown keeps its "Days" layout after dropping
/// below 24 hours.
#[derive(Debug)]
pub struct Countdown {
    remaining: u64,
    mode: DisplayMode,
    message: Option<String>,
    description: String,
    phase: Phase,
    tick_interval: Duration,
}

impl Countdown {
    /// Creates a countdown for a resolved request.
    ///
    /// # Examples
    ///
    /// ```
    /// use countdown_protocol::{DisplayMode, TimeSpec, resolve::resolve};
    /// use countdown_tui::Countdown;
    ///
    /// let request = resolve(&TimeSpec::relative(2, 0, 0, 0)).unwrap();
    /// let countdown = Countdown::new(request);
    /// assert_eq!(countdown.remaining(), 172_800);
    /// assert_eq!(countdown.mode(), DisplayMode::Days);
    /// ```
    #[must_use]
    pub fn new(request: CountdownRequest) -> Self {
        let remaining = request.total_seconds();
        Self {
            remaining,
            mode: DisplayMode::for_total(remaining),
            message: request.message,
            description: request.description,
            phase: if remaining == 0 {
                Phase::Expired
            } else {
                Phase::Running
            },
            tick_interval: TICK_INTERVAL,
        }
    }

    /// Replaces the tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// The display mode fixed at creation.
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the data for the current frame.
    #[must_use]
    pub fn frame(&self) -> CountdownFrame<'_> {
        CountdownFrame {
            remaining: self.remaining,
            mode: self.mode,
            message: self.message.as_deref(),
            description: &self.description,
        }
    }

    /// Renders the current frame.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        render_countdown(&self.frame(), area, frame.buffer_mut());
    }

    /// Applies a message. Messages after termination are ignored.
    pub fn update(&mut self, msg: Message) {
        if !self.phase.is_running() {
            return;
        }
        self.phase = match msg {
            Message::Cancel => Phase::Cancelled,
            Message::Interrupt => Phase::Interrupted,
        };
        debug!(?msg, phase = ?self.phase, "countdown stopped by user");
    }

    /// Finishes a tick: counts down one second, applies the key polled
    /// after the sleep, then expires at zero.
    pub fn advance(&mut self, msg: Option<Message>) {
        if !self.phase.is_running() {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if let Some(msg) = msg {
            self.update(msg);
        }
        if self.phase.is_running() && self.remaining == 0 {
            self.phase = Phase::Expired;
        }
    }

    /// Runs the countdown until it expires, is cancelled, or is interrupted.
    ///
    /// After the loop the screen is cleared and, unless the run was
    /// interrupted, one final key press is awaited so the last frame does
    /// not vanish immediately.
    ///
    /// The interrupt is `SIGINT`, watched through [`tokio::signal::ctrl_c`]
    /// for the whole run, including the final key wait.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing, clearing, or reading keys fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use countdown_protocol::{TimeSpec, resolve::resolve};
    /// use countdown_tui::{Countdown, event::TerminalKeys, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let request = resolve(&TimeSpec::relative(0, 0, 5, 0))?;
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let result = Countdown::new(request).run(&mut terminal, &mut TerminalKeys).await;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     result.map(|_| ())
    /// }
    /// ```
    pub async fn run<B>(
        &mut self,
        terminal: &mut Terminal<B>,
        keys: &mut impl KeySource,
    ) -> anyhow::Result<Phase>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
    {
        self.run_until(terminal, keys, tokio::signal::ctrl_c()).await
    }

    /// Runs the countdown like [`Countdown::run`], stopping with
    /// [`Phase::Interrupted`] as soon as `interrupt` completes.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing, clearing, or reading keys fails, or if
    /// `interrupt` resolves to an error.
    pub async fn run_until<B, F>(
        &mut self,
        terminal: &mut Terminal<B>,
        keys: &mut impl KeySource,
        interrupt: F,
    ) -> anyhow::Result<Phase>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
        F: Future<Output = io::Result<()>>,
    {
        info!(
            remaining = self.remaining,
            mode = ?self.mode,
            description = %self.description,
            "countdown started"
        );

        tokio::pin!(interrupt);

        while self.phase.is_running() {
            terminal.draw(|frame| self.view(frame))?;

            tokio::select! {
                () = tokio::time::sleep(self.tick_interval) => {}
                result = &mut interrupt => {
                    result?;
                    self.update(Message::Interrupt);
                    break;
                }
            }

            let msg = keys.poll()?;
            self.advance(msg);
        }

        terminal.clear()?;
        info!(phase = ?self.phase, remaining = self.remaining, "countdown finished");

        if self.phase == Phase::Interrupted {
            return Ok(self.phase);
        }

        while !keys.key_pressed()? {
            tokio::select! {
                () = tokio::time::sleep(KEY_WAIT_INTERVAL) => {}
                result = &mut interrupt => {
                    result?;
                    // update() ignores messages once the countdown has ended
                    self.phase = Phase::Interrupted;
                    info!("interrupted while waiting for the final key");
                    break;
                }
            }
        }

        Ok(self.phase)
    }
}
