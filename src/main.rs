// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use summer_school::app::{self, Flags};

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "summer_school=info".into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").ok().flatten(),
        config_dir: args
            .opt_value_from_str::<_, PathBuf>("--config-dir")
            .ok()
            .flatten(),
        assets_dir: args
            .opt_value_from_str::<_, PathBuf>("--assets-dir")
            .ok()
            .flatten(),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    app::run(flags)
}
