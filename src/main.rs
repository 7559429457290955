// SPDX-License-Identifier: MPL-2.0
use locale_snapshot::config::{self, Config};
use locale_snapshot::error::Result;
use locale_snapshot::{LocaleProvider, LocaleSnapshot, OverlayProvider, SystemLocaleProvider};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
locale-probe: print the locale resolved from the operating system

USAGE:
  locale-probe [OPTIONS]

OPTIONS:
  --config PATH     Read overrides from PATH instead of the default settings.toml
  --auto            Query the auto-updating locale instead of the current one
  --no-overrides    Ignore overrides from the config file
  --toml            Print the result as TOML
  -h, --help        Print this help
";

struct Flags {
    config_path: Option<PathBuf>,
    auto: bool,
    no_overrides: bool,
    toml: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    preferred_language: &'a str,
    locale: &'a LocaleSnapshot,
}

fn main() -> ExitCode {
    let _ = env_logger::try_init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprint!("{}", HELP);
            return ExitCode::from(2);
        }
    };

    match run(&flags) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> std::result::Result<Flags, String> {
    let flags = Flags {
        config_path: args
            .opt_value_from_str("--config")
            .map_err(|err| err.to_string())?,
        auto: args.contains("--auto"),
        no_overrides: args.contains("--no-overrides"),
        toml: args.contains("--toml"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        let unexpected: Vec<String> = remaining
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        return Err(format!("unexpected arguments: {}", unexpected.join(" ")));
    }
    Ok(flags)
}

fn run(flags: &Flags) -> Result<String> {
    let config = if flags.no_overrides {
        Config::default()
    } else {
        match &flags.config_path {
            Some(path) => config::load_from_path(path)?,
            None => config::load()?,
        }
    };
    log::debug!("Loaded locale overrides: {:?}", config.locale);

    let provider = OverlayProvider::new(SystemLocaleProvider::new(), config.locale);
    let locale = if flags.auto {
        provider.auto_updating_current_locale()
    } else {
        provider.current_locale()
    };
    let preferred_language = provider.preferred_language();

    if flags.toml {
        let report = Report {
            preferred_language: &preferred_language,
            locale: &locale,
        };
        return Ok(toml::to_string_pretty(&report)?);
    }

    Ok(format!(
        "identifier: {}\ncountry_code: {}\nlanguage_code: {}\ncurrency_symbol: {}\ncurrency_code: {}\npreferred_language: {}\n",
        locale.identifier(),
        locale.country_code(),
        locale.language_code(),
        locale.currency_symbol(),
        locale.currency_code(),
        preferred_language,
    ))
}
