// SPDX-License-Identifier: MPL-2.0
use comment_wall::app::{self, paths, Bootstrap, Flags};
use comment_wall::error::{Error, Result};

const HELP: &str = "\
Comment Wall

USAGE:
  comment_wall [OPTIONS]

OPTIONS:
  --api-url <URL>       Comment service base URL (overrides COMMENT_WALL_API_URL)
  --config-dir <DIR>    Directory holding settings.toml (overrides COMMENT_WALL_CONFIG_DIR)
  --data-dir <DIR>      Directory for diagnostics exports (overrides COMMENT_WALL_DATA_DIR)
  -h, --help            Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags> {
    let flags = Flags {
        api_url: args.opt_value_from_str("--api-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Config(format!(
            "unexpected arguments: {remaining:?}"
        )));
    }
    Ok(flags)
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let bootstrap = match Bootstrap::prepare(&flags) {
        Ok(bootstrap) => bootstrap,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    app::run(bootstrap)
}
