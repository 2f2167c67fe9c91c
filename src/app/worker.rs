use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::error::AttemptError;
use crate::http::{self, Exchange, Target};
use crate::metrics::WorkerStats;
use crate::resolver::Resolve;
use crate::shutdown::ShutdownReceiver;

const MILLIS_PER_SEC: f64 = 1_000.0;

/// Run options every worker copies at spawn time.
#[derive(Debug, Clone, Copy)]
pub struct WorkerOptions {
    /// Skip the inter-request delay entirely.
    pub benchmark: bool,
    /// Suppress per-success progress lines.
    pub quiet: bool,
    /// Upper bound for the randomized think time, in seconds.
    pub delay: f64,
}

/// One independent attempt loop.
///
/// A worker owns its stats, its random source, its resolver, and its HTTP
/// client; the only shared state it touches is the immutable target.
pub struct Worker {
    target: Arc<Target>,
    client: Client,
    resolver: Box<dyn Resolve>,
    rng: StdRng,
    options: WorkerOptions,
    run_start: Instant,
}

impl Worker {
    #[must_use]
    pub fn new(
        target: Arc<Target>,
        client: Client,
        resolver: Box<dyn Resolve>,
        seed: u64,
        options: WorkerOptions,
        run_start: Instant,
    ) -> Self {
        Self {
            target,
            client,
            resolver,
            rng: StdRng::seed_from_u64(seed),
            options,
            run_start,
        }
    }

    /// Runs attempts until the stop signal is observed, then emits the
    /// final stats exactly once on `results_tx`.
    ///
    /// The stop check is non-blocking and an attempt is never aborted
    /// mid-flight, so one extra in-flight attempt may complete after the
    /// signal is raised; the reported tallies include it.
    pub async fn run(mut self, mut stop_rx: ShutdownReceiver, results_tx: mpsc::Sender<WorkerStats>) {
        let mut stats = WorkerStats::new();
        loop {
            match stop_rx.try_recv() {
                Err(TryRecvError::Empty) => {}
                Ok(()) | Err(TryRecvError::Closed | TryRecvError::Lagged(_)) => break,
            }

            self.attempt(&mut stats).await;

            if !self.options.benchmark {
                tokio::time::sleep(self.think_time()).await;
            }
        }
        drop(results_tx.send(stats).await);
    }

    async fn attempt(&mut self, stats: &mut WorkerStats) {
        match self.try_attempt().await {
            Ok((exchange, addr)) => {
                stats.record_success(exchange.elapsed, exchange.body_bytes);
                if !self.options.quiet {
                    self.print_progress(&exchange, addr);
                }
            }
            Err(err) => {
                tracing::warn!("Attempt against {} failed: {}", self.target.host, err);
                stats.record_failure();
            }
        }
    }

    async fn try_attempt(&mut self) -> Result<(Exchange, IpAddr), AttemptError> {
        let addr = self.resolver.resolve(&self.target.host).await?;
        let exchange = http::execute(&self.client, &self.target, addr).await?;
        Ok((exchange, addr))
    }

    /// `delay × U(0,1)` seconds, at millisecond precision.
    fn think_time(&mut self) -> Duration {
        let fraction: f64 = self.rng.gen_range(0.0..1.0);
        Duration::from_millis((self.options.delay * fraction * MILLIS_PER_SEC) as u64)
    }

    fn print_progress(&self, exchange: &Exchange, addr: IpAddr) {
        println!(
            "{:?} {} {:5.2} secs: {} bytes {} {} {}",
            exchange.version,
            exchange.status.as_u16(),
            exchange.elapsed.as_secs_f64(),
            exchange.body_bytes,
            self.target.path,
            addr,
            self.run_start.elapsed().as_secs()
        );
    }
}
