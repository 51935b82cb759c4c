// SPDX-License-Identifier: MPL-2.0
use iced_concierge::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        server_url: args.opt_value_from_str("--server-url").unwrap(),
        csrf_token: args.opt_value_from_str("--csrf-token").unwrap(),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap(),
    };

    app::run(flags)
}
