use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{CliArgs, PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. CLI always wins: a
/// config value lands only where the matching argument was left at its
/// default.
///
/// # Errors
///
/// Returns an error when config values are invalid or inconsistent.
pub fn apply_config(
    args: &mut CliArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "benchmark")
        && let Some(benchmark) = config.benchmark
    {
        args.benchmark = benchmark;
    }

    if !is_cli(matches, "quiet")
        && let Some(quiet) = config.quiet
    {
        args.quiet = quiet;
    }

    if !is_cli(matches, "concurrent")
        && let Some(concurrent) = config.concurrent
    {
        args.concurrent = PositiveUsize::try_from(concurrent)
            .map_err(|_small| ConfigError::FieldMustBePositive { field: "concurrent" })?;
    }

    if !is_cli(matches, "time")
        && let Some(time) = config.time
    {
        args.time = PositiveU64::try_from(time)
            .map_err(|_small| ConfigError::FieldMustBePositive { field: "time" })?;
    }

    if !is_cli(matches, "delay")
        && let Some(delay) = config.delay
    {
        if !delay.is_finite() || delay < 0.0 {
            return Err(AppError::config(ConfigError::InvalidDelay));
        }
        args.delay = delay;
    }

    if !is_cli(matches, "dns_pool")
        && let Some(dns_pool) = config.dns_pool
    {
        args.dns_pool = dns_pool;
    }

    if !is_cli(matches, "dns_servers")
        && let Some(servers) = config.dns_servers.as_ref()
    {
        let mut parsed = Vec::with_capacity(servers.len());
        for server in servers {
            parsed.push(server.parse().map_err(|source| {
                ConfigError::InvalidDnsServer {
                    value: server.clone(),
                    source,
                }
            })?);
        }
        args.dns_servers = parsed;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout
    {
        args.timeout = PositiveU64::try_from(timeout)
            .map_err(|_small| ConfigError::FieldMustBePositive { field: "timeout" })?;
    }

    if !args.dns_pool && !args.dns_servers.is_empty() {
        return Err(AppError::config(ConfigError::DnsServersWithoutPool));
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}
