//! One-shot timer bookkeeping.
//!
//! The owner of a delayed callback keeps a [`OneShot`] slot. Arming a new
//! timer hands back the previous one so the caller can cancel it; firing only
//! succeeds for the timer that is currently armed, so a late callback from an
//! invalidated timer can never mutate state.

/// Identifier of a scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Monotonic generator for [`TimerId`]s.
#[derive(Debug, Default)]
pub struct TimerSeq {
    next: u64,
}

impl TimerSeq {
    pub fn next_id(&mut self) -> TimerId {
        let id = TimerId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Slot holding at most one pending timer.
#[derive(Debug, Default, Clone)]
pub struct OneShot {
    pending: Option<TimerId>,
}

impl OneShot {
    /// Arms `id`, returning the previously pending timer (now invalid).
    pub fn arm(&mut self, id: TimerId) -> Option<TimerId> {
        self.pending.replace(id)
    }

    /// Consumes the pending timer if `id` matches it.
    ///
    /// Returns false for stale or unknown ids.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Disarms the slot, returning the timer that must be cancelled.
    pub fn disarm(&mut self) -> Option<TimerId> {
        self.pending.take()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }
}
