// SPDX-License-Identifier: MPL-2.0
use lingua_nav::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let i18n_dir = args.opt_value_from_str("--i18n-dir").unwrap_or_else(|err| {
        log::warn!("Ignoring --i18n-dir: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("Ignoring --config-dir: {err}");
        None
    });

    for extra in args.finish() {
        log::warn!("Ignoring unexpected argument {:?}", extra);
    }

    app::run(Flags {
        lang,
        i18n_dir,
        config_dir,
    })
}
