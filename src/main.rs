// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! Deciduous CLI entrypoint.
//!
//! Compiles an attack-tree YAML document to Graphviz DOT on stdout. Errors go
//! to stderr with a non-zero exit, leaving stdout untouched so a consumer
//! piping into `dot` never sees a partial graph.

use std::io::Read;
use std::process::ExitCode;

use deciduous::model::SEED_DOCUMENT;
use deciduous::ops::compile_tree;
use deciduous::theme::ThemeRegistry;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<file>] [--theme <name>] [--json]\n  {program} --themes\n  {program} --seed\n\nCompiles an attack-tree YAML document to Graphviz DOT on stdout.\nWith no <file>, the document is read from stdin.\n\n--theme <name> overrides the document's own theme; unknown names fall back\nto the default theme.\n--json emits the graph description as JSON instead of DOT.\n--themes lists the available theme names.\n--seed prints the seed document for a new attack tree."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    file: Option<String>,
    theme: Option<String>,
    json: bool,
    themes: bool,
    seed: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--theme" => {
                if options.theme.is_some() {
                    return Err(());
                }
                let name = args.next().ok_or(())?;
                options.theme = Some(name);
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--themes" => {
                if options.themes {
                    return Err(());
                }
                options.themes = true;
            }
            "--seed" => {
                if options.seed {
                    return Err(());
                }
                options.seed = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.file.is_some() {
                    return Err(());
                }
                options.file = Some(arg);
            }
        }
    }

    if options.themes
        && (options.seed || options.json || options.file.is_some() || options.theme.is_some())
    {
        return Err(());
    }
    if options.seed && (options.file.is_some() || options.theme.is_some() || options.json) {
        return Err(());
    }

    Ok(options)
}

fn read_source(file: Option<&str>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "deciduous".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            return ExitCode::from(2);
        }
    };

    if options.themes {
        let registry = ThemeRegistry::builtin();
        for name in registry.names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    if options.seed {
        print!("{SEED_DOCUMENT}");
        return ExitCode::SUCCESS;
    }

    let source = match read_source(options.file.as_deref()) {
        Ok(source) => source,
        Err(error) => {
            match options.file.as_deref() {
                Some(path) => eprintln!("error: failed to read {path}: {error}"),
                None => eprintln!("error: failed to read stdin: {error}"),
            }
            return ExitCode::FAILURE;
        }
    };

    let registry = ThemeRegistry::builtin();
    let tree = match compile_tree(&source, options.theme.as_deref(), &registry) {
        Ok(tree) => tree,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };

    if options.json {
        match serde_json::to_string_pretty(&tree.graph) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                eprintln!("error: failed to serialize graph description: {error}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", tree.dot);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_file_with_theme_override() {
        let options = parse(&["tree.yaml", "--theme", "dark"]).expect("options");
        assert_eq!(options.file.as_deref(), Some("tree.yaml"));
        assert_eq!(options.theme.as_deref(), Some("dark"));
        assert!(!options.json);
    }

    #[test]
    fn rejects_two_positional_files() {
        assert_eq!(parse(&["a.yaml", "b.yaml"]), Err(()));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert_eq!(parse(&["--nope"]), Err(()));
    }

    #[test]
    fn themes_flag_is_exclusive() {
        assert!(parse(&["--themes"]).is_ok());
        assert_eq!(parse(&["--themes", "tree.yaml"]), Err(()));
        assert_eq!(parse(&["--seed", "--json"]), Err(()));
    }
}
