//! One-shot and repeating countdowns over a caller-supplied monotonic clock.
//!
//! Timers drive every time-boxed transition in the games: shoot cooldowns,
//! hit-flash duration, death delay, serve freezes and spawn pacing. The
//! clock is whatever `now` the caller passes in (game states accumulate
//! `time += dt`), which keeps the simulations deterministic and testable.

/// A countdown that is either inert or armed against a start timestamp.
///
/// `is_active()` doubles as the "is this cooldown still in effect" guard.
/// A duration of zero or less simply fires on the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    duration: f64,
    start_time: f64,
    active: bool,
    repeat: bool,
}

impl Timer {
    /// Inert one-shot timer; call [`Timer::activate`] to arm it.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            start_time: 0.0,
            active: false,
            repeat: false,
        }
    }

    /// Inert repeating timer.
    pub fn repeating(duration: f64) -> Self {
        Self {
            repeat: true,
            ..Self::new(duration)
        }
    }

    /// One-shot timer armed at `now`.
    pub fn started(duration: f64, now: f64) -> Self {
        let mut timer = Self::new(duration);
        timer.activate(now);
        timer
    }

    /// Repeating timer armed at `now`.
    pub fn started_repeating(duration: f64, now: f64) -> Self {
        let mut timer = Self::repeating(duration);
        timer.activate(now);
        timer
    }

    /// Arm the timer and record the start timestamp.
    pub fn activate(&mut self, now: f64) {
        self.active = true;
        self.start_time = now;
    }

    /// Disarm and reset the start timestamp to zero.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.start_time = 0.0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Advance the timer. Returns true when the countdown completed this
    /// tick; inactive timers are a no-op.
    ///
    /// Completion is only reported when the start timestamp is non-zero,
    /// which guards against a false trigger on a timer whose start was reset
    /// to zero. On completion a repeating timer re-arms at `now`, a one-shot
    /// deactivates.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.active {
            return false;
        }
        if now - self.start_time < self.duration {
            return false;
        }
        let fired = self.start_time != 0.0;
        if self.repeat {
            self.activate(now);
        } else {
            self.deactivate();
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inert_timer_never_fires_until_activated() {
        let mut timer = Timer::new(0.5);
        for i in 0..100 {
            assert!(!timer.tick(i as f64));
        }
        timer.activate(100.0);
        assert!(timer.is_active());
        assert!(!timer.tick(100.4));
        assert!(timer.tick(100.5));
        assert!(!timer.is_active());
    }

    #[test]
    fn one_shot_deactivates_after_firing() {
        let mut timer = Timer::started(1.0, 2.0);
        assert!(timer.tick(3.0));
        assert!(!timer.tick(10.0));
        assert!(!timer.is_active());
    }

    #[test]
    fn repeating_timer_fires_once_per_duration() {
        // Timer(duration=0.5, repeat=true, autostart=true) ticked with now
        // advancing by 0.5 exactly twice fires exactly twice.
        let mut timer = Timer::started_repeating(0.5, 1.0);
        let mut fired = 0;
        for step in 1..=2 {
            if timer.tick(1.0 + step as f64 * 0.5) {
                fired += 1;
            }
        }
        assert_eq!(fired, 2);
        assert!(timer.is_active());
    }

    #[test]
    fn repeating_timer_fire_rate_under_fast_ticking() {
        let mut timer = Timer::started_repeating(0.5, 1.0);
        let mut fired = 0;
        let mut now = 1.0;
        // 3 seconds of 60 Hz ticking
        for _ in 0..180 {
            now += 1.0 / 60.0;
            if timer.tick(now) {
                fired += 1;
            }
        }
        // One fire per 0.5 s, with one tick's tolerance
        assert!((5..=7).contains(&fired), "fired {fired} times");
    }

    #[test]
    fn zero_start_timestamp_suppresses_the_fire() {
        // A timer armed at t=0 has start_time == 0, indistinguishable from a
        // reset one; completion is swallowed but a repeating timer re-arms.
        let mut timer = Timer::started_repeating(0.5, 0.0);
        assert!(!timer.tick(0.5));
        assert!(timer.is_active());
        assert!(timer.tick(1.0));
    }

    #[test]
    fn degenerate_duration_fires_on_next_tick() {
        let mut timer = Timer::started(0.0, 5.0);
        assert!(timer.tick(5.0));

        let mut timer = Timer::started(-1.0, 5.0);
        assert!(timer.tick(5.0));
    }

    #[test]
    fn deactivate_resets_start_time() {
        let mut timer = Timer::started(0.5, 3.0);
        timer.deactivate();
        timer.active = true; // re-armed without a start timestamp
        assert!(!timer.tick(10.0));
    }
}
