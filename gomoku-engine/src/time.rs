use std::time::Instant;

// A single absolute deadline, checked cooperatively; no chess-clock time
// allocation math, since a single move budget (optional depth or deadline)
// is all the spec's search entry point takes.
pub struct TimeManager {
    deadline_micros: Option<u64>,
    start: Instant,
    timed_out: bool,
}

impl TimeManager {
    pub fn new(deadline_ms: Option<u64>) -> Self {
        Self {
            deadline_micros: deadline_ms.map(|ms| ms * 1000),
            start: Instant::now(),
            timed_out: false,
        }
    }

    pub fn elapsed_micros(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }

    // The deadline is checked at the top of each recursive call; once
    // exceeded the timed-out flag is sticky for the remainder of the
    // search.
    pub fn times_up(&mut self) -> bool {
        if self.timed_out {
            return true;
        }

        if let Some(deadline) = self.deadline_micros {
            if self.elapsed_micros() >= deadline {
                self.timed_out = true;
            }
        }

        self.timed_out
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }
}
