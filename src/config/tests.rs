use std::io::Write;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use super::{ConfigFile, apply_config, load_config};
use crate::args::CliArgs;
use crate::error::{AppError, AppResult, ConfigError};

fn parse_cli(argv: &[&str]) -> AppResult<(CliArgs, ArgMatches)> {
    let matches = CliArgs::command().try_get_matches_from(argv)?;
    let args = CliArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn write_config(content: &str) -> AppResult<(tempfile::TempDir, String)> {
    let dir = tempfile::tempdir()
        .map_err(|err| AppError::config(format!("tempdir failed: {}", err)))?;
    let path = dir.path().join("stampede.toml");
    let mut file = std::fs::File::create(&path)
        .map_err(|err| AppError::config(format!("create config failed: {}", err)))?;
    file.write_all(content.as_bytes())
        .map_err(|err| AppError::config(format!("write config failed: {}", err)))?;
    Ok((dir, path.to_string_lossy().into_owned()))
}

#[test]
fn loads_toml_config() -> AppResult<()> {
    let (_dir, path) = write_config(
        r#"url = "http://example.com/healthz"
benchmark = true
quiet = true
concurrent = 4
time = 5
delay = 0.25
dns_pool = true
dns_servers = ["1.1.1.1", "8.8.8.8"]
timeout = 30
"#,
    )?;

    let config = load_config(Some(&path))?
        .ok_or_else(|| AppError::config("Expected a config to load"))?;

    if config.url.as_deref() != Some("http://example.com/healthz") {
        return Err(AppError::config("Expected the config url to parse"));
    }
    if config.concurrent != Some(4) || config.time != Some(5) || config.timeout != Some(30) {
        return Err(AppError::config("Expected numeric fields to parse"));
    }
    if config.benchmark != Some(true) || config.quiet != Some(true) || config.dns_pool != Some(true)
    {
        return Err(AppError::config("Expected boolean fields to parse"));
    }
    if config.dns_servers.as_ref().map(Vec::len) != Some(2) {
        return Err(AppError::config("Expected two dns_servers entries"));
    }
    Ok(())
}

#[test]
fn accepts_field_aliases() -> AppResult<()> {
    let (_dir, path) = write_config("concurrency = 6\nduration = 9\n")?;

    let config = load_config(Some(&path))?
        .ok_or_else(|| AppError::config("Expected a config to load"))?;

    if config.concurrent != Some(6) || config.time != Some(9) {
        return Err(AppError::config(
            "Expected concurrency/duration aliases to map",
        ));
    }
    Ok(())
}

#[test]
fn rejects_non_toml_files() -> AppResult<()> {
    let dir = tempfile::tempdir()
        .map_err(|err| AppError::config(format!("tempdir failed: {}", err)))?;
    let path = dir.path().join("stampede.yaml");
    std::fs::write(&path, "url: http://example.com/")
        .map_err(|err| AppError::config(format!("write config failed: {}", err)))?;

    match load_config(Some(&path.to_string_lossy())) {
        Err(AppError::Config(ConfigError::UnsupportedExtension)) => Ok(()),
        Err(other) => Err(AppError::config(format!(
            "Expected an extension error, got {}",
            other
        ))),
        Ok(_) => Err(AppError::config("Expected a yaml config to be rejected")),
    }
}

#[test]
fn missing_explicit_config_errors() -> AppResult<()> {
    match load_config(Some("/nonexistent/stampede.toml")) {
        Err(AppError::Config(ConfigError::ReadConfig { .. })) => Ok(()),
        Err(other) => Err(AppError::config(format!(
            "Expected a read error, got {}",
            other
        ))),
        Ok(_) => Err(AppError::config("Expected a missing config to error")),
    }
}

#[test]
fn config_fills_arguments_left_at_defaults() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["stampede"])?;
    let config = ConfigFile {
        url: Some("http://example.com/".to_owned()),
        concurrent: Some(8),
        time: Some(3),
        delay: Some(0.5),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, &config)?;

    if args.url.as_deref() != Some("http://example.com/") {
        return Err(AppError::config("Expected the config url to apply"));
    }
    if args.concurrent.get() != 8 || args.time.get() != 3 {
        return Err(AppError::config("Expected config numbers to apply"));
    }
    if (args.delay - 0.5).abs() > f64::EPSILON {
        return Err(AppError::config("Expected the config delay to apply"));
    }
    Ok(())
}

#[test]
fn cli_arguments_beat_config_values() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["stampede", "http://cli.example/", "-c", "3"])?;
    let config = ConfigFile {
        url: Some("http://config.example/".to_owned()),
        concurrent: Some(8),
        time: Some(3),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, &config)?;

    if args.url.as_deref() != Some("http://cli.example/") {
        return Err(AppError::config("Expected the CLI url to win"));
    }
    if args.concurrent.get() != 3 {
        return Err(AppError::config("Expected the CLI concurrency to win"));
    }
    if args.time.get() != 3 {
        return Err(AppError::config("Expected the config duration to apply"));
    }
    Ok(())
}

#[test]
fn rejects_invalid_config_values() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["stampede", "http://example.com/"])?;

    let zero_workers = ConfigFile {
        concurrent: Some(0),
        ..ConfigFile::default()
    };
    match apply_config(&mut args, &matches, &zero_workers) {
        Err(AppError::Config(ConfigError::FieldMustBePositive { field })) if field == "concurrent" => {}
        Err(other) => {
            return Err(AppError::config(format!(
                "Expected a positivity error, got {}",
                other
            )));
        }
        Ok(()) => return Err(AppError::config("Expected concurrent = 0 to be rejected")),
    }

    let negative_delay = ConfigFile {
        delay: Some(-0.5),
        ..ConfigFile::default()
    };
    if apply_config(&mut args, &matches, &negative_delay).is_ok() {
        return Err(AppError::config("Expected a negative delay to be rejected"));
    }

    let bad_server = ConfigFile {
        dns_pool: Some(true),
        dns_servers: Some(vec!["not-an-ip".to_owned()]),
        ..ConfigFile::default()
    };
    match apply_config(&mut args, &matches, &bad_server) {
        Err(AppError::Config(ConfigError::InvalidDnsServer { .. })) => {}
        Err(other) => {
            return Err(AppError::config(format!(
                "Expected a DNS server parse error, got {}",
                other
            )));
        }
        Ok(()) => return Err(AppError::config("Expected a junk DNS server to be rejected")),
    }

    let servers_without_pool = ConfigFile {
        dns_servers: Some(vec!["1.1.1.1".to_owned()]),
        ..ConfigFile::default()
    };
    let (mut fresh_args, fresh_matches) = parse_cli(&["stampede", "http://example.com/"])?;
    match apply_config(&mut fresh_args, &fresh_matches, &servers_without_pool) {
        Err(AppError::Config(ConfigError::DnsServersWithoutPool)) => Ok(()),
        Err(other) => Err(AppError::config(format!(
            "Expected a pool-consistency error, got {}",
            other
        ))),
        Ok(()) => Err(AppError::config(
            "Expected dns_servers without dns_pool to be rejected",
        )),
    }
}
