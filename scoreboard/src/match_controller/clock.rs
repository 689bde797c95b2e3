use log::*;

/// Countdown clock for the match. Holds whole seconds and a running flag;
/// the one-second cadence is driven externally (see `app::ClockTicker`), the
/// clock itself only implements the transitions.
///
/// Invariant: `secs_remaining == 0` implies `!running`, after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchClock {
    secs_remaining: u32,
    running: bool,
}

impl MatchClock {
    pub fn new(secs: u32) -> Self {
        Self {
            secs_remaining: secs,
            running: false,
        }
    }

    pub fn secs_remaining(&self) -> u32 {
        self.secs_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns `true` if the clock actually started. Starting an expired
    /// clock is a no-op.
    pub fn start(&mut self) -> bool {
        if !self.running && self.secs_remaining > 0 {
            self.running = true;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the clock was running before the call.
    pub fn pause(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    /// Returns `true` if the running state changed.
    pub fn toggle(&mut self) -> bool {
        if self.running { self.pause() } else { self.start() }
    }

    /// One discrete one-second decrement. No-op unless running. Returns
    /// `true` if this tick expired the clock (and therefore stopped it).
    pub fn tick(&mut self) -> bool {
        if self.running && self.secs_remaining > 0 {
            self.secs_remaining -= 1;
            if self.secs_remaining == 0 {
                self.running = false;
                return true;
            }
        }
        false
    }

    /// Returns `true` if the clock was running before the call.
    pub fn reset(&mut self, default_secs: u32) -> bool {
        let was_running = self.running;
        self.secs_remaining = default_secs;
        self.running = false;
        was_running
    }

    /// Manual edit. Seconds above 59 are clamped to 59; minutes are
    /// unbounded. The running state is preserved, except that setting the
    /// clock to zero stops it. Returns `true` if the running state changed.
    pub fn set(&mut self, minutes: u32, seconds: u32) -> bool {
        self.secs_remaining = minutes.saturating_mul(60).saturating_add(seconds.min(59));
        if self.secs_remaining == 0 && self.running {
            info!("Clock manually set to zero, stopping it");
            self.running = false;
            true
        } else {
            false
        }
    }
}

/// Parses manual clock input of the form `"MM:SS"` or `"MM"`.
///
/// Segments must parse as unsigned integers, so negative numerals are
/// rejected along with everything else non-numeric. Returns `None` for any
/// malformed input; callers are expected to discard the edit in that case.
pub fn parse_clock_text(text: &str) -> Option<(u32, u32)> {
    let mut segments = text.trim().split(':');
    let minutes = segments.next()?.trim().parse().ok()?;
    let seconds = match segments.next() {
        Some(s) => s.trim().parse().ok()?,
        None => 0,
    };
    if segments.next().is_some() {
        return None;
    }
    Some((minutes, seconds))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_start_requires_time() {
        let mut clock = MatchClock::new(0);
        assert_eq!(clock.start(), false);
        assert_eq!(clock.is_running(), false);

        let mut clock = MatchClock::new(5);
        assert_eq!(clock.start(), true);
        assert_eq!(clock.is_running(), true);
        assert_eq!(clock.start(), false);
    }

    #[test]
    fn test_toggle_honors_start_guard() {
        let mut clock = MatchClock::new(0);
        assert_eq!(clock.toggle(), false);
        assert_eq!(clock.is_running(), false);

        let mut clock = MatchClock::new(10);
        assert_eq!(clock.toggle(), true);
        assert_eq!(clock.is_running(), true);
        assert_eq!(clock.toggle(), true);
        assert_eq!(clock.is_running(), false);
    }

    #[test]
    fn test_tick_noop_when_stopped() {
        let mut clock = MatchClock::new(10);
        clock.tick();
        assert_eq!(clock.secs_remaining(), 10);
    }

    #[test]
    fn test_tick_stops_at_zero() {
        let mut clock = MatchClock::new(1);
        clock.start();
        assert_eq!(clock.tick(), true);
        assert_eq!(clock.secs_remaining(), 0);
        assert_eq!(clock.is_running(), false);

        // A further tick must be a no-op
        assert_eq!(clock.tick(), false);
        assert_eq!(clock.secs_remaining(), 0);
    }

    #[test]
    fn test_countdown_scenario() {
        let mut clock = MatchClock::new(3);
        clock.start();
        assert_eq!(clock.tick(), false);
        assert_eq!(clock.tick(), false);
        assert_eq!(clock.tick(), true);
        assert_eq!(clock.secs_remaining(), 0);
        assert_eq!(clock.is_running(), false);
        assert_eq!(clock.tick(), false);
        assert_eq!(clock.secs_remaining(), 0);
    }

    #[test]
    fn test_reset_stops_clock() {
        let mut clock = MatchClock::new(3);
        clock.start();
        assert_eq!(clock.reset(1200), true);
        assert_eq!(clock.secs_remaining(), 1200);
        assert_eq!(clock.is_running(), false);
        assert_eq!(clock.reset(1200), false);
    }

    #[test]
    fn test_set_clamps_seconds() {
        let mut clock = MatchClock::new(0);
        clock.set(2, 75);
        assert_eq!(clock.secs_remaining(), 179);

        clock.set(2, 59);
        assert_eq!(clock.secs_remaining(), 179);

        clock.set(2, 60);
        assert_eq!(clock.secs_remaining(), 179);

        clock.set(0, 30);
        assert_eq!(clock.secs_remaining(), 30);
    }

    #[test]
    fn test_set_preserves_running_unless_zero() {
        let mut clock = MatchClock::new(10);
        clock.start();
        assert_eq!(clock.set(1, 0), false);
        assert_eq!(clock.is_running(), true);

        assert_eq!(clock.set(0, 0), true);
        assert_eq!(clock.is_running(), false);
        assert_eq!(clock.secs_remaining(), 0);
    }

    #[test]
    fn test_parse_clock_text() {
        assert_eq!(parse_clock_text("02:30"), Some((2, 30)));
        assert_eq!(parse_clock_text("2:5"), Some((2, 5)));
        assert_eq!(parse_clock_text("15"), Some((15, 0)));
        assert_eq!(parse_clock_text(" 7 : 45 "), Some((7, 45)));
        assert_eq!(parse_clock_text("02:75"), Some((2, 75)));

        assert_eq!(parse_clock_text("abc"), None);
        assert_eq!(parse_clock_text("1:xx"), None);
        assert_eq!(parse_clock_text("1:2:3"), None);
        assert_eq!(parse_clock_text(""), None);
        assert_eq!(parse_clock_text(":30"), None);
        assert_eq!(parse_clock_text("-5"), None);
        assert_eq!(parse_clock_text("1:-30"), None);
    }
}
