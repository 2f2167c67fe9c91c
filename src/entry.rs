use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::CliArgs;
use crate::error::{AppResult, ConfigError};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose);

    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, &matches, &config)?;
    }

    if args.url.is_none() {
        tracing::error!("Missing target URL (pass it as the positional argument or set it in config).");
        return Err(ConfigError::MissingUrl.into());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let summary = runtime.block_on(crate::app::run_load(&args))?;
    crate::app::print_summary(&summary);
    Ok(())
}

fn parse_args() -> AppResult<(CliArgs, ArgMatches)> {
    let cmd = CliArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = cmd.get_matches_from(raw_args);
    let args = CliArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
