// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use textfmt::{
    capitalize,
    config::FormatSettings,
    format_file_size,
    path::{default_config_path, expand_path},
    truncate,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::exit};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(
    about,
    override_usage = "textfmt [options] <textfmt-command>",
    subcommand_help_heading = "Commands",
    version
)]
struct Cli {
    /// Path to settings file.
    #[arg(short, long, global = true, value_name = "path")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    fn run(self) -> Result<()> {
        let settings = load_settings(self.config)?;
        let output = match self.command {
            Command::Truncate(opts) => run_truncate(opts, &settings),
            Command::Capitalize(opts) => run_capitalize(opts),
            Command::Size(opts) => run_size(opts, &settings),
        };
        println!("{output}");

        Ok(())
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Truncate text to a maximum length, marking the cut with an ellipsis.
    #[command(override_usage = "textfmt truncate [options] <text> <max_len>")]
    Truncate(TruncateOptions),

    /// Upper-case the first character of text.
    #[command(override_usage = "textfmt capitalize <text>")]
    Capitalize(CapitalizeOptions),

    /// Format byte count as human-readable file size.
    #[command(override_usage = "textfmt size [options] <bytes>")]
    Size(SizeOptions),
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct TruncateOptions {
    /// Text to truncate.
    #[arg(value_name = "text")]
    pub text: String,

    /// Maximum length of result, ellipsis included.
    #[arg(allow_negative_numbers = true, value_name = "max_len")]
    pub max_len: i64,

    /// Marker to append to truncated text.
    #[arg(short, long, value_name = "marker")]
    pub ellipsis: Option<String>,
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct CapitalizeOptions {
    /// Text to capitalize.
    #[arg(value_name = "text")]
    pub text: String,
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct SizeOptions {
    /// Number of bytes to format.
    #[arg(allow_negative_numbers = true, value_name = "bytes")]
    pub bytes: f64,

    /// Decimal places to round to.
    #[arg(short, long, value_name = "count")]
    pub decimals: Option<usize>,
}

fn main() {
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    if let Err(error) = run() {
        error!("{error:?}");
        exit(1);
    }

    exit(0)
}

fn run() -> Result<()> {
    Cli::parse().run()
}

fn load_settings(config: Option<String>) -> Result<FormatSettings> {
    let path: PathBuf = match config {
        Some(path) => expand_path(path)?,
        None => default_config_path()?,
    };
    debug!("load settings from {:?}", path.display());

    Ok(FormatSettings::load(path)?)
}

fn run_truncate(opts: TruncateOptions, settings: &FormatSettings) -> String {
    let ellipsis = opts.ellipsis.as_deref().unwrap_or(&settings.truncate.ellipsis);
    truncate(Some(&opts.text), opts.max_len, Some(ellipsis))
}

fn run_capitalize(opts: CapitalizeOptions) -> String {
    capitalize(Some(&opts.text))
}

fn run_size(opts: SizeOptions, settings: &FormatSettings) -> String {
    let decimals = opts.decimals.unwrap_or(settings.file_size.decimals);
    format_file_size(Some(opts.bytes), Some(decimals))
}
