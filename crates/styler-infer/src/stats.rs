use std::time::Duration;

/// Rolling frames-per-second average.
///
/// Each sample is folded in as `total += fps; average = total / window;
/// total -= average`, so the average follows the recent frame rate and
/// settles on it when frames take a constant time.
#[derive(Clone, Debug)]
pub struct FpsMeter {
    window: usize,
    total: f64,
    average: f64,
}

impl FpsMeter {
    pub const DEFAULT_WINDOW: usize = 10;

    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            total: 0.0,
            average: 0.0,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    /// Folds in the duration of one frame and returns the new average.
    pub fn record(&mut self, elapsed: Duration) -> f64 {
        let seconds = elapsed.as_secs_f64();
        let fps = if seconds > 0.0 { 1.0 / seconds } else { 0.0 };
        self.total += fps;
        self.average = self.total / self.window as f64;
        self.total -= self.average;
        self.average
    }

    pub fn reset(&mut self) {
        self.total = 0.0;
        self.average = 0.0;
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
