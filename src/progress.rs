// src/progress.rs
/// Progress reporting for long-running operations (grant collection).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once before the first request.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each page with the running retrieved count and the
    /// server-reported total.
    fn page_done(&mut self, _retrieved: u64, _total: u64) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// `retrieved / total` clamped to `[0, 1]`. A total of 0 counts as 1.
pub fn fraction(retrieved: u64, total: u64) -> f32 {
    let ratio = retrieved as f64 / total.max(1) as f64;
    ratio.clamp(0.0, 1.0) as f32
}
