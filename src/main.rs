// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use tinyview::app::{self, Flags};
use tinyview::logging;

const USAGE: &str = "\
Usage: tinyview [--config-dir DIR] [FONT] [PATH]

  PATH   directory to browse, or an image to open inside its directory
         (defaults to the current directory)
  FONT   font file used for the command bar

Options:
  --config-dir DIR   read settings.toml from DIR
  -h, --help         print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("tinyview: {err}\n\n{USAGE}");
            return ExitCode::from(1);
        }
    };

    let Some(flags) = Flags::from_free_args(args.finish(), config_dir) else {
        eprint!("{USAGE}");
        return ExitCode::from(1);
    };

    let (config, config_warning) = app::load_config(&flags);
    if let Err(err) = logging::init(config.logging.level()) {
        eprintln!("tinyview: {err}");
    }
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    let launch = match app::prepare(&flags, &config) {
        Ok(launch) => launch,
        Err(err) => {
            tracing::error!(%err, "startup failed");
            eprintln!("tinyview: {err}");
            return ExitCode::from(1);
        }
    };
    tracing::info!(
        images = launch.catalog.len(),
        directory = %launch.catalog.directory().display(),
        "catalog ready"
    );

    match app::run(launch) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "event loop failed");
            eprintln!("tinyview: {err}");
            ExitCode::from(1)
        }
    }
}
