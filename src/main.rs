// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use storefront_gallery::app::{self, paths, Flags};
use storefront_gallery::{catalog, logging};

const HELP: &str = "\
Usage: storefront_gallery [OPTIONS] <CATALOG>

Arguments:
  <CATALOG>            Product catalog file (TOML)

Options:
  --lang <LOCALE>      Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> ExitCode {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let parsed = (|| -> Result<(Option<String>, Option<String>, PathBuf), pico_args::Error> {
        let lang = args.opt_value_from_str("--lang")?;
        let config_dir = args.opt_value_from_str("--config-dir")?;
        let catalog_path = args.free_from_str()?;
        Ok((lang, config_dir, catalog_path))
    })();

    let (lang, config_dir, catalog_path) = match parsed {
        Ok(values) => values,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(config_dir);

    let catalog = match catalog::load_from_path(&catalog_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(path = %catalog_path.display(), %err, "failed to load catalog");
            return ExitCode::FAILURE;
        }
    };

    match app::run(Flags { lang, catalog }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
