// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedToast playground

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --position <NAME>     top_left, top_right, bottom_left, bottom_right,
                        top_center or bottom_center
  --light-background    Use the pale color set
  --timer <MS>          Default toast duration in milliseconds
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toast=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        light_background: args.contains("--light-background"),
        position: opt_value(&mut args, "--position"),
        timer_ms: opt_value(&mut args, "--timer"),
        config_dir: opt_value(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(flags)
}

/// Reads an optional flag value, logging and ignoring malformed input.
fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%err, flag = key, "ignoring invalid argument");
        None
    })
}
