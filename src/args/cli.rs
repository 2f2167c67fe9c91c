use std::net::IpAddr;
use std::time::Duration;

use clap::Parser;

use super::parsers::parse_delay;
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP stress test tool with per-attempt DNS resolution - fixed-duration worker pools, randomized think time, and siege-style summary output."
)]
pub struct CliArgs {
    /// Target URL to stress (http or https)
    pub url: Option<String>,

    /// Benchmark mode: no inter-request delay
    #[arg(long, short = 'b')]
    pub benchmark: bool,

    /// Quiet mode: suppress per-request progress lines
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Number of simultaneous workers
    #[arg(long = "concurrent", short = 'c', default_value = "10")]
    pub concurrent: PositiveUsize,

    /// Run duration in seconds
    #[arg(long = "time", short = 't', default_value = "60")]
    pub time: PositiveU64,

    /// Upper bound in seconds for the randomized inter-request delay
    #[arg(long = "delay", short = 'd', default_value = "1.0", value_parser = parse_delay)]
    pub delay: f64,

    /// Resolve the host per attempt through the round-robin DNS server pool
    #[arg(long = "dns-pool")]
    pub dns_pool: bool,

    /// DNS server for the round-robin pool (repeatable; overrides the built-in pool)
    #[arg(long = "dns-server", requires = "dns_pool")]
    pub dns_servers: Vec<IpAddr>,

    /// Request timeout in seconds
    #[arg(long = "timeout", default_value = "120")]
    pub timeout: PositiveU64,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Config file path (TOML)
    #[arg(long)]
    pub config: Option<String>,
}

impl CliArgs {
    #[must_use]
    pub const fn run_duration(&self) -> Duration {
        Duration::from_secs(self.time.get())
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.get())
    }
}
