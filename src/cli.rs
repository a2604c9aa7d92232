/*
    Copyright 2025 TII (SSRC) and the contributors
    SPDX-License-Identifier: Apache-2.0
*/
use clap::Parser;
use clap::ValueEnum;
use lazy_static::lazy_static;
use std::path::PathBuf;

lazy_static! {
    static ref CLI_ARGS: Args = {
        let args = Args::parse();
        println!("{args:?}");
        args
    };
}

#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq)]
pub enum LogOutput {
    #[default]
    Syslog,
    Stdout,
}

/// IRC toolbar GUI for Ghaf
#[derive(Parser, Debug)]
#[command(name = "IRC Toolbar GUI")]
#[command(about = "IRC network connection toolbar")]
#[command(long_about = None)]
struct Args {
    /// Log severity
    #[arg(long, default_value_t = log::Level::Info)]
    pub log_level: log::Level,

    /// Log output
    #[arg(long, value_enum, default_value_t)]
    pub log_output: LogOutput,

    /// Directory scanned for `*.conf` network definitions
    #[arg(long, default_value = "/etc/irc-toolbar-gui/networks.d")]
    pub configs_dir: PathBuf,
}

pub fn get_log_level() -> &'static log::Level {
    &CLI_ARGS.log_level
}

pub fn get_log_output() -> &'static LogOutput {
    &CLI_ARGS.log_output
}

pub fn get_configs_dir() -> &'static PathBuf {
    &CLI_ARGS.configs_dir
}

/// Routes `log` output according to the command line.
pub fn init_logging() {
    match get_log_output() {
        LogOutput::Stdout => {
            env_logger::Builder::new()
                .filter_level(get_log_level().to_level_filter())
                .init();
        }
        LogOutput::Syslog => {
            if let Err(err) = syslog::init(
                syslog::Facility::LOG_USER,
                get_log_level().to_level_filter(),
                Some("irc-toolbar-gui"),
            ) {
                eprintln!("Could not initialize syslog output: {err}");
            }
        }
    }
}
