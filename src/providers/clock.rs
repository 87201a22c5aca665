use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeZone};

/// Format used for the `updated` field of items, e.g. `3/1/2025, 4:07:09.250 PM`
pub const UPDATED_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S%.3f %p";

/// Source of `updated` timestamps
///
/// Injected into the inventory service so tests can control the time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// Current time rendered for the `updated` field
    fn timestamp(&self) -> String {
        self.now().format(UPDATED_FORMAT).to_string()
    }
}

/// Wall clock in the server's local timezone
///
/// Readings are strictly increasing at millisecond resolution: a reading that
/// would not advance past the previous one is bumped by 1ms, so a create
/// followed immediately by an update never share a stamp.
#[derive(Debug, Default)]
pub struct SystemClock {
    last_millis: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        let wall = Local::now().timestamp_millis();
        let previous = self
            .last_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(wall.max(last + 1)))
            .unwrap_or(wall);
        let millis = wall.max(previous + 1);

        Local
            .timestamp_millis_opt(millis)
            .single()
            .unwrap_or_else(Local::now)
    }
}
