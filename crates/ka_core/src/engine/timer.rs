//! One-second timer bookkeeping
//!
//! The core itself never sleeps; the host owns the wall-clock timer and
//! forwards each expiry as a `tick` intent. What the core can guarantee is
//! the start/stop pairing: the timer must be started exactly once when the
//! match enters Running and cancelled exactly once when it leaves, with no
//! overlapping timers. [`TickTimer`] is that guarantee. The host calls
//! [`TickTimer::sync`] with the current running flag after every intent and
//! obeys the returned command; Start and Stop strictly alternate no matter
//! how often sync is polled.

/// Instruction to the host's timer facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Arm the one-second interval timer
    Start,
    /// Cancel the interval timer
    Stop,
}

/// Tracks whether the host timer is currently armed.
#[derive(Debug, Default, Clone)]
pub struct TickTimer {
    armed: bool,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Reconcile with the current running flag.
    ///
    /// Returns `Some(Start)` on the paused-to-running edge, `Some(Stop)` on
    /// the running-to-paused edge, and `None` when already in sync. Calling
    /// this any number of times with an unchanged flag is a no-op.
    pub fn sync(&mut self, running: bool) -> Option<TimerCommand> {
        match (self.armed, running) {
            (false, true) => {
                self.armed = true;
                Some(TimerCommand::Start)
            }
            (true, false) => {
                self.armed = false;
                Some(TimerCommand::Stop)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_emitted_once_per_transition() {
        let mut timer = TickTimer::new();
        assert_eq!(timer.sync(true), Some(TimerCommand::Start));
        // Polling again with the same flag must not arm a second timer
        assert_eq!(timer.sync(true), None);
        assert_eq!(timer.sync(true), None);
        assert!(timer.is_armed());
    }

    #[test]
    fn test_stop_emitted_once_per_transition() {
        let mut timer = TickTimer::new();
        timer.sync(true);
        assert_eq!(timer.sync(false), Some(TimerCommand::Stop));
        assert_eq!(timer.sync(false), None);
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_stop_without_start_is_noop() {
        let mut timer = TickTimer::new();
        assert_eq!(timer.sync(false), None);
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_commands_strictly_alternate() {
        let mut timer = TickTimer::new();
        let flags = [true, true, false, true, false, false, true, true, true, false];

        let mut last: Option<TimerCommand> = None;
        for running in flags {
            if let Some(cmd) = timer.sync(running) {
                assert_ne!(Some(cmd), last, "two consecutive {:?} commands", cmd);
                last = Some(cmd);
            }
        }
    }
}
