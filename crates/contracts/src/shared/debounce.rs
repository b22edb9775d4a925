//! Trailing-edge debouncer with an explicit millisecond clock.
//!
//! Every `push` cancels the pending value and reschedules the deadline, so a
//! burst of inputs yields exactly one value: the last one, released once the
//! quiet period has elapsed. The caller owns the timer and the clock.

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Replace any pending value. Returns the new deadline.
    pub fn push(&mut self, value: T, now_ms: u64) -> u64 {
        let deadline = now_ms.saturating_add(self.delay_ms);
        self.pending = Some((value, deadline));
        deadline
    }

    /// Release the pending value if its quiet period is over.
    pub fn take_due(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now_ms >= deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Time left until the pending value is due; `None` when nothing is pending.
    pub fn remaining(&self, now_ms: u64) -> Option<u64> {
        self.pending
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_sub(now_ms))
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
