//! pubdoc CLI - publish a markdown file as a Confluence page.
//!
//! Renders the file to HTML and creates a page titled after the file name.
//! When the title is already taken in the space the existing page is updated
//! in place. `--delete` removes the page with that title instead.

mod error;
mod output;
mod publish;

use std::ffi::OsString;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use output::Output;
use publish::PublishArgs;

/// pubdoc - markdown to Confluence publisher.
#[derive(Parser)]
#[command(name = "pubdoc", version, about)]
struct Cli {
    #[command(flatten)]
    args: PublishArgs,
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os(), &long_flag_names()));
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.args.execute(&output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Long flag names and aliases accepted by the CLI.
fn long_flag_names() -> Vec<String> {
    let command = Cli::command();
    let mut names: Vec<String> = command
        .get_arguments()
        .flat_map(|arg| {
            arg.get_long()
                .into_iter()
                .chain(arg.get_all_aliases().unwrap_or_default())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect();
    names.extend(["help", "version"].map(str::to_owned));
    names
}

/// Accept single-dash long flags (`-markdownFilePath x`) by rewriting them
/// to their double-dash form. Unknown or short flags pass through untouched,
/// as does everything after a bare `--`.
fn normalize_args<I>(args: I, long_names: &[String]) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || positional_only {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                positional_only = true;
                return arg;
            }
            let Some(flag) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if long_names.iter().any(|long| long == name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
