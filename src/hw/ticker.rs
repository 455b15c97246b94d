//! Periodic scan tick on top of `embassy_time::Ticker`.
//!
//! The ticker does not overlap ticks: the scan task awaits `next()`,
//! runs one full scan, then awaits again. Missed ticks are skipped.

use embassy_time::{Duration, Ticker};
use keyscan::{ScanHandle, ScanScheduler};

pub struct TickerScheduler;

impl ScanScheduler for TickerScheduler {
    type Handle = ScanTicker;

    fn schedule_periodic(&mut self, interval_ms: u32) -> ScanTicker {
        ScanTicker(Ticker::every(Duration::from_millis(interval_ms.into())))
    }
}

pub struct ScanTicker(Ticker);

impl ScanTicker {
    /// Wait for the next scan tick.
    pub async fn next(&mut self) {
        self.0.next().await
    }
}

impl ScanHandle for ScanTicker {
    fn cancel(self) {
        // Dropping the ticker ends the schedule.
    }
}
