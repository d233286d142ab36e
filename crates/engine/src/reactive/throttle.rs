//! Leading-edge click throttle.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

/// Lets the first click of a button through and drops repeats until the
/// window since that click has passed. Dropped clicks are never replayed.
#[derive(Debug)]
pub struct ButtonThrottle {
    window: TimeDelta,
    last_fired: HashMap<String, DateTime<Utc>>,
}

impl ButtonThrottle {
    pub fn new(window: TimeDelta) -> Self {
        Self {
            window,
            last_fired: HashMap::new(),
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        let millis = i64::try_from(millis).unwrap_or(i64::MAX);
        Self::new(TimeDelta::try_milliseconds(millis).unwrap_or(TimeDelta::MAX))
    }

    /// Whether a click of `button` at `now` runs.
    pub fn admit(&mut self, button: &str, now: DateTime<Utc>) -> bool {
        if let Some(last) = self.last_fired.get(button) {
            if now.signed_duration_since(*last) < self.window {
                return false;
            }
        }
        self.last_fired.insert(button.to_string(), now);
        true
    }
}
