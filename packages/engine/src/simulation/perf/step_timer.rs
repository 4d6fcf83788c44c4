//! Step timing for perf metrics

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the first call in this process
#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Measures one `step` when perf metrics are on; reads no clock otherwise
#[derive(Clone, Copy, Debug)]
pub(crate) struct StepTimer {
    started_ms: Option<f64>,
}

impl StepTimer {
    pub(crate) fn start(enabled: bool) -> Self {
        Self {
            started_ms: enabled.then(now_ms),
        }
    }

    /// Duration for `StepStats::step_ms`: 0 when timing is off
    pub(crate) fn finish(self) -> f64 {
        self.started_ms
            .map_or(0.0, |started| (now_ms() - started).max(0.0))
    }
}
