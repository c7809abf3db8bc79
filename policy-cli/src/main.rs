//! Command-line interface for privacy-policy
//! Renders a policy described in a TOML file as HTML, plain text, Markdown or JSON.
//!
//! Usage:
//!   privacy-policy `<config>` [--format `<format>`] [--lang `<lang>`] [--output `<file>`]
//!   privacy-policy --list-formats
//!   privacy-policy --list-languages
//!
//! Flags override the `[render]` table of the config file. Without `--format`, the format
//! is taken from the extension of `--output` when it names one, else from the config file.

use clap::{Arg, ArgAction, ArgMatches, Command};
use policy_config::{Loader, PolicyConfig};
use privacy_policy::i18n::FAIL_ON_MISSING_TRANSLATIONS;
use privacy_policy::{FormatRegistry, Language, PolicyError};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let matches = Command::new("privacy-policy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders privacy policies from a TOML description")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .help("Path to the policy file (TOML)")
                .required_unless_present_any(["list-formats", "list-languages"])
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (html, text, markdown, json)"),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .short('l')
                .help("Language of the policy (en, de)"),
        )
        .arg(
            Arg::new("minified")
                .long("minified")
                .help("Write JSON on a single line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on sentences that have no translation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-children")
                .long("no-children")
                .help("Leave out the section on children's privacy")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write to this file instead of stdout"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .help("List available languages")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    if matches.get_flag("list-languages") {
        handle_list_languages_command();
        return;
    }

    if let Err(message) = handle_render_command(&matches, &registry) {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

/// Layer the flags over the policy file
fn load_config(matches: &ArgMatches, registry: &FormatRegistry) -> Result<PolicyConfig, String> {
    let Some(path) = matches.get_one::<String>("config") else {
        return Err("a policy file is required".to_string());
    };
    let mut loader = Loader::new().with_file(path);

    let format = matches.get_one::<String>("format").cloned().or_else(|| {
        matches
            .get_one::<String>("output")
            .and_then(|output| Path::new(output).extension())
            .and_then(|extension| registry.for_extension(&extension.to_string_lossy()))
            .map(|format| format.name().to_string())
    });
    if let Some(format) = format {
        loader = loader
            .set_override("render.format", format)
            .map_err(|e| e.to_string())?;
    }

    if let Some(lang) = matches.get_one::<String>("lang") {
        let language: Language = lang.parse().map_err(|e: PolicyError| e.to_string())?;
        loader = loader
            .set_override("render.language", language.code())
            .map_err(|e| e.to_string())?;
    }

    if matches.get_flag("minified") {
        loader = loader
            .set_override("render.minified", true)
            .map_err(|e| e.to_string())?;
    }
    if matches.get_flag("strict") {
        loader = loader
            .set_override("render.strict_translations", true)
            .map_err(|e| e.to_string())?;
    }

    let mut config = loader
        .build()
        .map_err(|e| format!("cannot load '{}': {}", path, e))?;

    if matches.get_flag("no-children") {
        config.policy.children_minimum_age = None;
    }

    Ok(config)
}

/// Handle rendering a policy file
fn handle_render_command(matches: &ArgMatches, registry: &FormatRegistry) -> Result<(), String> {
    let config = load_config(matches, registry)?;

    let mut options = config.render.to_options();
    options.strict_translations |= FAIL_ON_MISSING_TRANSLATIONS;
    debug!(
        format = %config.render.format,
        language = %options.language,
        strict = options.strict_translations,
        "Rendering policy"
    );

    let rendered = registry
        .render(&config.policy, &config.render.format, &options)
        .map_err(|e| match e {
            PolicyError::FormatNotFound(name) => format!(
                "unknown format '{}' (available: {})",
                name,
                registry.list_formats().join(", ")
            ),
            other => other.to_string(),
        })?;

    match matches.get_one::<String>("output") {
        Some(output) => std::fs::write(output, format!("{}\n", rendered))
            .map_err(|e| format!("cannot write '{}': {}", output, e)),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}

/// Handle the list-languages command
fn handle_list_languages_command() {
    println!("Available languages:\n");

    for language in Language::ALL {
        println!("  {}  {}", language.code(), language.native_name());
    }
}
