// SPDX-License-Identifier: MPL-2.0
use lens_share::app::{self, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: lens-share [--lang <id>] [--name <title>] [--config-dir <dir>] <resource>";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lens_share=info")),
        )
        .init();

    let flags = match Flags::from_args(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "viewer terminated with an error");
            ExitCode::FAILURE
        }
    }
}
