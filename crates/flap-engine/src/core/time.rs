/// Monotonic game clock fed by the host's per-frame deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    elapsed_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame. Negative or non-finite deltas (clock skew) are ignored.
    pub fn advance(&mut self, dt_ms: f64) {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
        }
    }

    /// Milliseconds since the clock started.
    pub fn now_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

/// Fires when strictly more than `interval_ms` has elapsed since it last fired.
/// A freshly reset timer fires on its first poll.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: f64,
    last_fire_ms: Option<f64>,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: None,
        }
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        let due = match self.last_fire_ms {
            None => true,
            Some(last) => now_ms - last > self.interval_ms,
        };
        if due {
            self.last_fire_ms = Some(now_ms);
        }
        due
    }

    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }
}
