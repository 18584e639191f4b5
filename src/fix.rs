use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::Verdict;

/// Echoes the checked tokens, space separated, with misspelled ones in red.
pub fn highlight(checked: &[(&str, Verdict)]) -> String {
    checked
        .iter()
        .map(|(token, verdict)| match verdict {
            Verdict::Misspelled(_) => token.red().to_string(),
            _ => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, PartialEq, Eq)]
pub enum Choice {
    Suggestion(usize),
    Custom,
    Ignore,
}

/// Anything that is not `c` or a listed number leaves the token as is.
pub fn parse_choice(answer: &str, suggestions: usize) -> Choice {
    match answer.trim() {
        "c" => Choice::Custom,
        "i" => Choice::Ignore,
        other => match other.parse::<usize>() {
            Ok(index) if index < suggestions => Choice::Suggestion(index),
            _ => Choice::Ignore,
        },
    }
}

/// Asks what `token` should be replaced with.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    token: &str,
    suggestions: &[String],
) -> io::Result<String> {
    writeln!(output, "\nIncorrect word: {token}")?;
    if suggestions.is_empty() {
        writeln!(output, "No suggestions found.")?;
        write!(output, "Enter 'c' for custom spelling, 'i' to ignore: ")?;
    } else {
        writeln!(output, "Suggestions:")?;
        for (i, suggestion) in suggestions.iter().enumerate() {
            writeln!(output, "{i}. {suggestion}")?;
        }
        write!(output, "Enter choice (number), 'c' for custom, 'i' to ignore: ")?;
    }
    output.flush()?;

    let replacement = match parse_choice(&read_answer(input)?, suggestions.len()) {
        Choice::Suggestion(index) => suggestions[index].clone(),
        Choice::Custom => {
            write!(output, "Enter replacement: ")?;
            output.flush()?;
            let custom = read_answer(input)?;
            if custom.is_empty() {
                token.to_string()
            } else {
                custom
            }
        }
        Choice::Ignore => token.to_string(),
    };

    Ok(replacement)
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no answer on stdin"));
    }
    Ok(line.trim().to_string())
}

/// One replacement per distinct misspelled token; `ask` runs once for each.
pub fn collect_replacements<F>(
    checked: &[(&str, Verdict)],
    mut ask: F,
) -> io::Result<HashMap<String, String>>
where
    F: FnMut(&str, &[String]) -> io::Result<String>,
{
    let mut replacements = HashMap::new();

    for (token, verdict) in checked {
        if let Verdict::Misspelled(suggestions) = verdict {
            if replacements.contains_key(*token) {
                continue;
            }
            let replacement = ask(*token, suggestions.as_slice())?;
            replacements.insert(token.to_string(), replacement);
        }
    }

    Ok(replacements)
}

/// Tokens with replacements applied, joined by single spaces.
pub fn rewrite(tokens: &[&str], replacements: &HashMap<String, String>) -> String {
    tokens
        .iter()
        .map(|token| replacements.get(*token).map_or(*token, String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
