//! Simulated narration playback.
//!
//! Progress advances by a fixed step per tick while playing; there is no
//! audio behind it.

use crate::latency::delay;
use crate::model::reading_session::clamp_progress;
use std::time::Duration;

/// Progress gained per tick, in percent.
pub const PROGRESS_STEP: f64 = 2.0;
/// Interval between ticks when driven by `advance`.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);
/// Jump size for skip back/forward, in percent.
pub const SKIP_STEP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
    Completed,
}

/// Playback position of one reading session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSimulator {
    state: PlaybackState,
    progress: f64,
}

impl Default for PlaybackSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackSimulator {
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Idle,
            progress: 0.0,
        }
    }

    /// Resumes from a stored session position.
    pub fn at(progress: f64) -> Self {
        let mut simulator = Self::new();
        simulator.progress = clamp_progress(progress);
        if simulator.progress >= 100.0 {
            simulator.state = PlaybackState::Completed;
        }
        simulator
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Starts playing; a completed run restarts from 0.
    pub fn play(&mut self) {
        if self.state == PlaybackState::Completed {
            self.progress = 0.0;
        }
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Playing;
        }
    }

    /// Stops and rewinds to the start.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Idle;
        self.progress = 0.0;
    }

    pub fn skip_back(&mut self) {
        self.progress = clamp_progress(self.progress - SKIP_STEP);
    }

    pub fn skip_forward(&mut self) {
        self.progress = clamp_progress(self.progress + SKIP_STEP);
    }

    /// Advances one step when playing and reports the resulting state.
    pub fn tick(&mut self) -> PlaybackState {
        if self.state == PlaybackState::Playing {
            self.progress = clamp_progress(self.progress + PROGRESS_STEP);
            if self.progress >= 100.0 {
                self.state = PlaybackState::Completed;
            }
        }
        self.state
    }

    /// Waits `interval`, then ticks.
    pub async fn advance(&mut self, interval: Duration) -> PlaybackState {
        delay(interval).await;
        self.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::{PlaybackSimulator, PlaybackState, TICK_INTERVAL};
    use std::time::Duration;

    #[test]
    fn ticks_only_move_while_playing() {
        let mut playback = PlaybackSimulator::new();
        assert_eq!(playback.tick(), PlaybackState::Idle);
        assert_eq!(playback.progress(), 0.0);

        playback.play();
        playback.tick();
        playback.tick();
        assert_eq!(playback.progress(), 4.0);

        playback.pause();
        assert_eq!(playback.tick(), PlaybackState::Paused);
        assert_eq!(playback.progress(), 4.0);

        playback.resume();
        assert_eq!(playback.tick(), PlaybackState::Playing);
        assert_eq!(playback.progress(), 6.0);
    }

    #[test]
    fn fifty_ticks_complete_a_run() {
        let mut playback = PlaybackSimulator::new();
        playback.play();
        for _ in 0..49 {
            assert_eq!(playback.tick(), PlaybackState::Playing);
        }
        assert_eq!(playback.tick(), PlaybackState::Completed);
        assert_eq!(playback.progress(), 100.0);

        playback.play();
        assert_eq!(playback.progress(), 0.0);
    }

    #[test]
    fn stop_rewinds_and_skips_clamp() {
        let mut playback = PlaybackSimulator::at(95.0);
        playback.skip_forward();
        assert_eq!(playback.progress(), 100.0);
        playback.stop();
        assert_eq!(playback.state(), PlaybackState::Idle);
        playback.skip_back();
        assert_eq!(playback.progress(), 0.0);
        assert_eq!(PlaybackSimulator::at(250.0).state(), PlaybackState::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn advance_waits_one_interval_per_tick() {
        let started = tokio::time::Instant::now();
        let mut playback = PlaybackSimulator::new();
        playback.play();
        playback.advance(TICK_INTERVAL).await;
        playback.advance(TICK_INTERVAL).await;
        assert_eq!(playback.progress(), 4.0);
        assert!(started.elapsed() >= Duration::from_millis(400));
    }
}
