use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use serde::Serialize;

use prosespell::{Dictionary, SpellChecker};

#[derive(Parser)]
#[command(version, about = "Spell checker for prose and markdown")]
struct Opts {
    /// Path to the newline-delimited word list
    #[arg(long)]
    dict: PathBuf,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Check files for unknown words
    Check(CheckOpts),
    /// Suggest replacements for the given word
    Suggest(SuggestOpts),
}

#[derive(Args)]
struct CheckOpts {
    #[arg(long, value_enum, default_value = "text")]
    output_format: OutputFormat,

    /// List of paths to check
    sources: Vec<PathBuf>,
}

#[derive(Args)]
struct SuggestOpts {
    word: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct ErrorRecord {
    word: String,
    offset: usize,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let dictionary = Dictionary::load(&opts.dict)?;
    let mut checker = SpellChecker::new(dictionary);

    match opts.action {
        Action::Check(check_opts) => check(&mut checker, check_opts),
        Action::Suggest(suggest_opts) => suggest(&checker, suggest_opts),
    }
}

fn check(checker: &mut SpellChecker, opts: CheckOpts) -> Result<()> {
    let mut errors = BTreeMap::new();
    let mut num_errors = 0;

    for source in &opts.sources {
        let text = std::fs::read_to_string(source)
            .with_context(|| format!("Could not read '{}'", source.display()))?;
        let found = checker.check(&text);
        num_errors += found.len();
        let records: Vec<_> = found
            .iter()
            .map(|e| ErrorRecord {
                word: e.word().to_string(),
                offset: e.offset(),
            })
            .collect();
        if opts.output_format == OutputFormat::Text {
            for record in &records {
                let prefix = format!("{}:{}", source.display(), record.offset);
                println!(
                    "{}: {}: {}: {}",
                    prefix,
                    "error".red(),
                    "unknown word".clear(),
                    record.word
                );
            }
        }
        errors.insert(source.display().to_string(), records);
    }

    if opts.output_format == OutputFormat::Json {
        let json = serde_json::to_string(&errors).expect("errors should be serializable");
        println!("{json}");
    }

    match num_errors {
        0 => {
            if opts.output_format == OutputFormat::Text {
                println!("{} No spelling errors found", "=>".blue());
            }
            Ok(())
        }
        n => bail!("Found {n} spelling error(s)"),
    }
}

fn suggest(checker: &SpellChecker, opts: SuggestOpts) -> Result<()> {
    for suggestion in checker.suggest(&opts.word) {
        println!("{suggestion}");
    }
    Ok(())
}
