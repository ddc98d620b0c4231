use std::time::{Duration, Instant};

/// One frame at 60Hz.
pub const RENDER_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDecision {
    Now,
    Deferred(Instant),
    AlreadyPending,
}

/// Bounds render frequency without dropping requests.
///
/// A request inside the interval schedules exactly one deferred render; later
/// requests in the same window fold into it.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    interval: Duration,
    last_render: Option<Instant>,
    pending: Option<Instant>,
}

impl RenderThrottle {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_render: None,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<Instant> {
        self.pending
    }

    pub fn request(&mut self, now: Instant) -> RenderDecision {
        if self.pending.is_some() {
            return RenderDecision::AlreadyPending;
        }

        let due = self
            .last_render
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if due {
            self.last_render = Some(now);
            return RenderDecision::Now;
        }

        let at = now + self.interval;
        self.pending = Some(at);
        RenderDecision::Deferred(at)
    }

    /// Returns `true` when the deferred render is due and consumes it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(at) if now >= at => {
                self.pending = None;
                self.last_render = Some(now);
                true
            }
            _ => false,
        }
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(RENDER_INTERVAL)
    }
}
