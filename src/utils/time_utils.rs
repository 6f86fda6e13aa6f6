use web_time::{Duration, Instant};

/// Monotonic instant that works on native *and* WASM targets.
/// (std::time::Instant panics in the browser; web-time papers over that.)
#[derive(Debug, Clone, Copy)]
pub struct AppInstant(Instant);

impl AppInstant {
    pub fn now() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.0.elapsed().as_millis()
    }
}
