//! Last-write-wins debouncing for bursts of input events.

/// Handed out per scheduled run; only the newest one is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Decides which of several overlapping delayed runs actually executes.
///
/// The browser layer schedules a timer per event and asks [`Debouncer::fire`]
/// when it expires. Timers from superseded events get `false` even if their
/// cancellation raced with expiry.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn schedule(&mut self) -> Ticket {
        self.generation += 1;
        self.pending = true;
        Ticket(self.generation)
    }

    /// True exactly once, for the most recent ticket.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Drop the pending run, if any.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_runs_only_last_schedule() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.schedule();
        let second = debouncer.schedule();
        let third = debouncer.schedule();

        assert!(!debouncer.fire(first));
        assert!(!debouncer.fire(second));
        assert!(debouncer.fire(third));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn ticket_fires_once() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule();
        assert!(debouncer.fire(ticket));
        assert!(!debouncer.fire(ticket));
    }

    #[test]
    fn separate_bursts_each_run() {
        let mut debouncer = Debouncer::default();
        let a = debouncer.schedule();
        assert!(debouncer.fire(a));
        let b = debouncer.schedule();
        assert!(debouncer.fire(b));
    }

    #[test]
    fn cancelled_run_never_fires() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule();
        debouncer.cancel();
        assert!(!debouncer.fire(ticket));
    }
}
