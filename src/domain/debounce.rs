use std::time::Duration;

/// Quiet interval for free-text inputs. Discrete controls (dropdowns, sort
/// toggles, pagers) dispatch immediately and never pass through here.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Last-write-wins debounce core. Each `schedule` stores the newest value and
/// invalidates every earlier ticket; the timer wrapper calls `settle` with
/// its ticket after the delay and delivers only if no later `schedule`
/// happened in between. A burst of N schedules therefore yields exactly one
/// delivery, carrying the last value of the burst.
#[derive(Debug, Default)]
pub struct DebounceGate<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> DebounceGate<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Stores `value` as the candidate delivery and returns the ticket the
    /// caller must present to `settle`.
    pub fn schedule(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// Takes the pending value if `ticket` is still the newest one. Stale
    /// tickets get nothing, and the value can be taken at most once.
    pub fn settle(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops any pending value and invalidates outstanding tickets. Called on
    /// view teardown so no delivery outlives its consumer.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}
