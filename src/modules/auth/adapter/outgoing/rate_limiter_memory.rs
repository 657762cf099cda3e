use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::auth::application::ports::outgoing::RateLimiter;

struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window counter per key, held in process memory. Good enough
/// for a single instance; a restart forgets all windows.
pub struct MemoryRateLimiter {
    max_per_window: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

// Stale entries are swept once the map grows past this size.
const PRUNE_THRESHOLD: usize = 1024;

impl MemoryRateLimiter {
    pub fn new(max_per_window: u32, window: Duration) -> Self {
        Self {
            max_per_window,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().expect("rate limiter lock poisoned");

        if windows.len() > PRUNE_THRESHOLD {
            let window = self.window;
            windows.retain(|_, w| now.duration_since(w.started) < window);
        }

        let entry = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        // An elapsed window resets rather than slides
        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        entry.count += 1;
        entry.count <= self.max_per_window
    }
}

impl RateLimiter for MemoryRateLimiter {
    fn allow(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }
}
