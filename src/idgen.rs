use chrono::Utc;

/// Source of task ids. Implementations must never hand out the same
/// id twice, and must respect `reserve_up_to` so ids loaded from disk
/// are never reissued.
pub trait IdGenerator {
    fn next_id(&mut self) -> u64;

    /// Raise the generator floor so every future id is > `floor`.
    fn reserve_up_to(&mut self, floor: u64);
}

/// Wall-clock seeded generator (milliseconds since the epoch).
/// Two calls within the same millisecond still get distinct ids:
/// if the clock has not advanced past the last issued id, we bump
/// by one instead.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: u64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }

    fn reserve_up_to(&mut self, floor: u64) {
        self.last = self.last.max(floor);
    }
}

/// Deterministic counter, for tests and scripted runs.
#[derive(Debug)]
pub struct SerialIds {
    next: u64,
}

impl SerialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SerialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SerialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    fn reserve_up_to(&mut self, floor: u64) {
        if self.next <= floor {
            self.next = floor + 1;
        }
    }
}
