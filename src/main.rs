// SPDX-License-Identifier: MPL-2.0
use petal_grid::app::{self, paths, Flags};
use petal_grid::logging;

const HELP: &str = "\
PetalGrid - tap-to-enlarge photo gallery

USAGE:
  petal_grid [OPTIONS]

OPTIONS:
  --lang <TAG>          UI language (e.g. en-US, fr)
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {:?}", remaining);
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    if let Err(err) = logging::init_logging() {
        eprintln!("{}", err);
    }

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("Error: {}\n\n{}", err, HELP);
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
