use std::time::Duration;

/// Per-worker tallies for one run.
///
/// Owned exclusively by one worker while it runs and handed to the
/// coordinator by value exactly once, so no locking is ever involved.
/// Every completed attempt increments exactly one of `success`/`failed`;
/// in-flight attempts are never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    /// Response-body bytes successfully read.
    pub data_bytes: u64,
    /// Cumulative latency across successful attempts only.
    pub response_time_sum: Duration,
    pub success: u64,
    pub failed: u64,
    /// Slowest successful attempt; stays `Duration::ZERO` until the first
    /// success, so the first success always sets it.
    pub longest: Duration,
    /// Fastest successful attempt; stays `Duration::MAX` until the first
    /// success, so the first success always sets it.
    pub shortest: Duration,
}

impl WorkerStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data_bytes: 0,
            response_time_sum: Duration::ZERO,
            success: 0,
            failed: 0,
            longest: Duration::ZERO,
            shortest: Duration::MAX,
        }
    }

    pub fn record_success(&mut self, elapsed: Duration, body_bytes: u64) {
        self.success = self.success.saturating_add(1);
        self.data_bytes = self.data_bytes.saturating_add(body_bytes);
        self.response_time_sum = self.response_time_sum.saturating_add(elapsed);
        if elapsed > self.longest {
            self.longest = elapsed;
        }
        if elapsed < self.shortest {
            self.shortest = elapsed;
        }
    }

    pub fn record_failure(&mut self) {
        self.failed = self.failed.saturating_add(1);
    }

    /// Component-wise merge; `longest`/`shortest` take the max/min across
    /// workers rather than summing.
    pub fn merge(&mut self, other: Self) {
        self.data_bytes = self.data_bytes.saturating_add(other.data_bytes);
        self.response_time_sum = self.response_time_sum.saturating_add(other.response_time_sum);
        self.success = self.success.saturating_add(other.success);
        self.failed = self.failed.saturating_add(other.failed);
        if other.longest > self.longest {
            self.longest = other.longest;
        }
        if other.shortest < self.shortest {
            self.shortest = other.shortest;
        }
    }

    #[must_use]
    pub const fn attempts(&self) -> u64 {
        self.success.saturating_add(self.failed)
    }
}

impl Default for WorkerStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate of the whole run, computed once after every worker reported
/// and immutable from then on.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub totals: WorkerStats,
    /// Nominal run duration. Workers may each finish one in-flight attempt
    /// after the stop edge; that skew is accepted and not subtracted out,
    /// so rates are computed against the nominal duration.
    pub duration: Duration,
    pub transactions: u64,
    /// Percent of attempts that succeeded; 100 when nothing failed, even
    /// with zero attempts.
    pub availability: f64,
    /// Transactions per second of nominal duration.
    pub transaction_rate: f64,
    /// Body bytes per second of nominal duration.
    pub throughput: f64,
    /// Mean latency of successful attempts in seconds; 0.0 when there were
    /// no successes (never NaN).
    pub mean_response_time: f64,
}

impl RunSummary {
    #[must_use]
    pub fn compute(totals: WorkerStats, duration: Duration) -> Self {
        let transactions = totals.attempts();
        let secs = duration.as_secs_f64();

        let availability = if totals.failed == 0 {
            100.0
        } else {
            100.0 - 100.0 * totals.failed as f64 / transactions as f64
        };
        let (transaction_rate, throughput) = if secs > 0.0 {
            (transactions as f64 / secs, totals.data_bytes as f64 / secs)
        } else {
            (0.0, 0.0)
        };
        let mean_response_time = if totals.success == 0 {
            0.0
        } else {
            totals.response_time_sum.as_secs_f64() / totals.success as f64
        };

        Self {
            totals,
            duration,
            transactions,
            availability,
            transaction_rate,
            throughput,
            mean_response_time,
        }
    }
}
