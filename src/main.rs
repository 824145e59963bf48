// SPDX-License-Identifier: MPL-2.0
use iced_herald::app::{self, Flags};

fn main() -> iced::Result {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("failed to build logger instance");

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        toast_ms: args.opt_value_from_str("--toast-ms").ok().flatten(),
    };

    app::run(flags)
}
