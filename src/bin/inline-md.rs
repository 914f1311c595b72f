//! Command-line interface for inline-markdown
//! This binary parses inline markdown and writes it out in one of the registered formats.
//!
//! Usage:
//!   inline-md render [`<path>`] [--format `<format>`] [--config `<file>`] [--no-link-target]
//!   inline-md list-formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use inline_markdown::markdown::config::{Loader, MarkdownConfig};
use inline_markdown::markdown::formats::FormatRegistry;
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = Command::new("inline-md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse inline markdown (*bold*, _italic_, [links](url), paragraphs)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Parse markdown and print it in the chosen format")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file (reads stdin when omitted)")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'html', 'json', 'treeviz')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("no-link-target")
                        .long("no-link-target")
                        .help("Render links without target/rel attributes")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(render_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) {
    let config =
        load_config(matches).unwrap_or_else(|e| fail(format!("invalid configuration: {e}")));

    let source = match matches.get_one::<String>("path") {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("reading {path}: {e}"))),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|e| fail(format!("reading stdin: {e}")));
            buffer
        }
    };

    let format = &config.output.format;
    tracing::info!(bytes = source.len(), format = %format, "rendering input");
    let output = FormatRegistry::from_config(&config)
        .render(&source, format)
        .unwrap_or_else(|e| fail(e));
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Layers, lowest first: defaults, `--config` file, `INLINE_MD_*` variables, flags.
fn load_config(matches: &ArgMatches) -> Result<MarkdownConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader = loader
        .with_environment()
        .plain_links(matches.get_flag("no-link-target"));
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.format(format.as_str());
    }
    loader.build()
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for formatter in FormatRegistry::default().formats() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
    }
}
