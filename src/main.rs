mod dev;
mod fix;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dev::measure;
use fix::{collect_replacements, highlight, prompt, rewrite};
use triespell::{AsciiNormalizer, Dictionary, SearchStrategy, SuggestConfigBuilder, is_checkable};

/// Checks words against a vocabulary and suggests close matches.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Vocabulary file with whitespace separated words
    #[arg(short, long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Check the words of this file instead of WORD arguments
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Largest edit distance of a suggestion
    #[arg(long, default_value_t = 1)]
    max_distance: usize,

    /// Most suggestions shown per word
    #[arg(long, default_value_t = 10)]
    limit: usize,

    #[arg(long, value_enum, default_value_t = Strategy::Pruned)]
    strategy: Strategy,

    /// Echo the text with misspelled words in red instead of one line per word
    #[arg(long)]
    highlight: bool,

    /// Ask for a correction of each misspelled word and save the result to --input
    #[arg(long, requires = "input")]
    fix: bool,

    #[arg(value_name = "WORD")]
    words: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    Pruned,
    Exhaustive,
}

impl From<Strategy> for SearchStrategy {
    fn from(strategy: Strategy) -> SearchStrategy {
        match strategy {
            Strategy::Pruned => SearchStrategy::Pruned,
            Strategy::Exhaustive => SearchStrategy::Exhaustive,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Verdict {
    Correct,
    // no letters to check
    Skipped,
    Misspelled(Vec<String>),
}

fn check(dictionary: &Dictionary, token: &str) -> Verdict {
    if !is_checkable(token) {
        return Verdict::Skipped;
    }
    if dictionary.exists(token) {
        return Verdict::Correct;
    }
    Verdict::Misspelled(dictionary.suggest(token))
}

fn report(token: &str, verdict: &Verdict) -> String {
    match verdict {
        Verdict::Correct => format!("{token}: ok"),
        Verdict::Skipped => format!("{token}: skipped"),
        Verdict::Misspelled(suggestions) if suggestions.is_empty() => {
            format!("{token}: misspelled, no suggestions")
        }
        Verdict::Misspelled(suggestions) => {
            format!("{token}: misspelled, did you mean {}", suggestions.join(", "))
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SuggestConfigBuilder::default()
        .max_distance(cli.max_distance)
        .limit(cli.limit)
        .strategy(cli.strategy.into())
        .build()?;

    let dictionary = measure("load", || {
        Dictionary::load_with(&cli.dictionary, config, AsciiNormalizer::new())
    })
    .with_context(|| format!("cannot check words without {}", cli.dictionary.display()))?;

    let text = match &cli.input {
        Some(path) => {
            let bytes =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        None => cli.words.join(" "),
    };

    let verdicts: Vec<(&str, Verdict)> = measure("check", || {
        text.split_whitespace()
            .map(|token| (token, check(&dictionary, token)))
            .collect()
    });

    if cli.highlight {
        println!("{}", highlight(&verdicts));
    } else {
        for (token, verdict) in &verdicts {
            println!("{}", report(token, verdict));
        }
    }

    if let (true, Some(path)) = (cli.fix, &cli.input) {
        let mut input = io::stdin().lock();
        let mut output = io::stdout();
        let replacements = collect_replacements(&verdicts, |token, suggestions| {
            prompt(&mut input, &mut output, token, suggestions)
        })?;

        let tokens: Vec<&str> = verdicts.iter().map(|(token, _)| *token).collect();
        fs::write(path, rewrite(&tokens, &replacements))
            .with_context(|| format!("failed to save {}", path.display()))?;

        info!(path = %path.display(), replaced = replacements.len(), "saved corrected text");
        println!("\nCorrected text saved to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let misspelled = verdicts
        .iter()
        .any(|(_, verdict)| matches!(verdict, Verdict::Misspelled(_)));

    Ok(if misspelled {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
