use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Local;
use tokio::sync::{broadcast, mpsc};
use tokio::time::Instant;

use crate::args::{CliArgs, DEFAULT_DNS_POOL};
use crate::error::{AppResult, ConfigError, RunError};
use crate::http::{self, Target};
use crate::metrics::{RunSummary, WorkerStats};
use crate::resolver;
use crate::shutdown::ShutdownSender;

use super::worker::{Worker, WorkerOptions};

/// Wall-clock format for the run-start stamp.
const START_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// DNS servers answer on the well-known port.
const DNS_PORT: u16 = 53;
/// Decorrelates a worker's resolver stream from its think-time stream.
const RESOLVER_SEED_ROTATION: u32 = 17;

/// Runs the whole load test: spawn `concurrent` workers, wait out the run
/// duration, raise the stop edge, drain one result per worker, merge.
///
/// The drain has no timeout: cancellation is cooperative, so a stuck
/// request stalls completion until it resolves or times out at the
/// transport layer.
///
/// # Errors
///
/// Returns an error when the target URL is missing or unparseable, when a
/// client cannot be built, or when a worker dies without reporting.
pub async fn run_load(args: &CliArgs) -> AppResult<RunSummary> {
    let raw_url = args.url.as_deref().ok_or(ConfigError::MissingUrl)?;
    let target = Arc::new(Target::parse(raw_url)?);
    let concurrency = args.concurrent.get();
    let run_duration = args.run_duration();

    let pool = dns_pool(args);
    let (stop_tx, _): (ShutdownSender, _) = broadcast::channel(1);
    let (results_tx, mut results_rx) = mpsc::channel::<WorkerStats>(concurrency);

    println!("{}", Local::now().format(START_STAMP_FORMAT));
    let run_start = Instant::now();

    let options = WorkerOptions {
        benchmark: args.benchmark,
        quiet: args.quiet,
        delay: args.delay,
    };

    let mut handles = Vec::with_capacity(concurrency);
    for ordinal in 0..concurrency {
        let client = http::build_client(args.request_timeout())?;
        let seed = worker_seed(ordinal);
        let resolver = resolver::build_resolver(
            pool.as_ref(),
            target.resolve_port(),
            seed.rotate_left(RESOLVER_SEED_ROTATION),
        );
        let worker = Worker::new(
            Arc::clone(&target),
            client,
            resolver,
            seed,
            options,
            run_start,
        );
        handles.push(tokio::spawn(
            worker.run(stop_tx.subscribe(), results_tx.clone()),
        ));
    }
    drop(results_tx);

    tokio::time::sleep(run_duration).await;
    drop(stop_tx.send(()));

    let mut totals = WorkerStats::new();
    for _ in 0..concurrency {
        let stats = results_rx
            .recv()
            .await
            .ok_or(RunError::MissingWorkerResult)?;
        totals.merge(stats);
    }
    for handle in handles {
        handle.await?;
    }

    Ok(RunSummary::compute(totals, run_duration))
}

fn dns_pool(args: &CliArgs) -> Option<Arc<[SocketAddr]>> {
    if !args.dns_pool {
        return None;
    }
    let servers: Vec<SocketAddr> = if args.dns_servers.is_empty() {
        DEFAULT_DNS_POOL
            .iter()
            .map(|ip| SocketAddr::new(*ip, DNS_PORT))
            .collect()
    } else {
        args.dns_servers
            .iter()
            .map(|ip| SocketAddr::new(*ip, DNS_PORT))
            .collect()
    };
    Some(servers.into())
}

/// Wall clock plus ordinal, so concurrently spawned workers never share a
/// random stream.
fn worker_seed(ordinal: usize) -> u64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
        });
    nanos.wrapping_add(ordinal as u64)
}
