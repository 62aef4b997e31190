// SPDX-License-Identifier: MPL-2.0
use shopping_list::app::{self, paths, Flags};
use shopping_list::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Shopping List

USAGE:
  shopping_list [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <PATH>    Directory holding settings.toml
  -h, --help             Print this help and exit

ENVIRONMENT:
  SHOPPING_LIST_CONFIG_DIR   Config directory (overridden by --config-dir)
  RUST_LOG                   Log filter (default: warn,shopping_list=info)
";

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(message) => {
            eprintln!("error: {message}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Returns `Ok(None)` when help was requested.
fn parse_args() -> Result<Option<Flags>, String> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args
            .opt_value_from_str("--lang")
            .map_err(|err| err.to_string())?,
        config_dir: args
            .opt_value_from_str("--config-dir")
            .map_err(|err| err.to_string())?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {remaining:?}"));
    }

    Ok(Some(flags))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
