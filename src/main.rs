// SPDX-License-Identifier: MPL-2.0
use pedidos_backoffice::app::{self, Flags};
use pedidos_backoffice::logging;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        api_base: args.opt_value_from_str("--api-base").unwrap_or(None),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    // Paths must be known before the log directory is resolved
    app::paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    let _log_guard = logging::init();

    app::run(flags)
}
