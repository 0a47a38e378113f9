/// Variable-step frame clock.
/// Turns host frame deltas into simulation deltas: negative deltas become 0 and
/// long stalls (tab switches, breakpoints) are capped at `max_dt`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    max_dt: f64,
    elapsed: f64,
    frame: u64,
}

impl FrameClock {
    pub fn new(max_dt: f64) -> Self {
        Self {
            max_dt: max_dt.max(0.0),
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Record one frame. Returns the delta the simulation should advance by.
    pub fn tick(&mut self, frame_dt: f64) -> f64 {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        };
        self.elapsed += dt;
        self.frame += 1;
        dt
    }

    /// Total simulation time handed out so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }
}
