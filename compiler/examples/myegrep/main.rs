//! An egrep-style line-oriented search over a file or standard input,
//! backed by one of the three engines: a compiled DFA, KMP, or Boyer-Moore.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::{Parser, ValueEnum};

use pattern_compiler::compile;
use pattern_runtime::{BoyerMoore, Kmp, TextMatcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Exact substring matching via the failure function.
    Kmp,
    /// Exact substring matching via the bad-character heuristic.
    Boyer,
    /// Regular-expression matching via the compiled automaton.
    Regex,
}

#[derive(Debug, Parser)]
#[command(
    name = "myegrep",
    version,
    about = "Search a file line by line using KMP, Boyer-Moore, or a compiled DFA"
)]
struct Cli {
    /// Pattern to search for.
    pattern: String,

    /// Path to the text file, or '-' for standard input.
    file: String,

    /// Matching engine.
    #[arg(short, long, value_enum, default_value_t = Mode::Regex)]
    mode: Mode,

    /// Report matches per line, prefixed with the line number.
    #[arg(short = 'n', long)]
    line_number: bool,

    /// Lowercase the pattern and every line before matching.
    #[arg(short, long)]
    ignore_case: bool,

    /// Stop after this many matches; zero or below means unbounded.
    #[arg(long, default_value_t = 0)]
    max_matches: isize,

    /// Dump the compiled automaton's transition table before scanning.
    #[arg(short, long)]
    debug: bool,

    /// Emit the aggregate result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    let pattern = if cli.ignore_case {
        cli.pattern.to_lowercase()
    } else {
        cli.pattern.clone()
    };

    let matcher: Box<dyn TextMatcher> = match cli.mode {
        Mode::Kmp => Box::new(Kmp::new(&pattern)),
        Mode::Boyer => Box::new(BoyerMoore::new(&pattern)),
        Mode::Regex => {
            let dfa = compile(&pattern).map_err(|err| err.to_string())?;
            if cli.debug {
                print!("{}", dfa);
            }
            Box::new(dfa)
        }
    };

    let input: Box<dyn BufRead> = if cli.file == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&cli.file).map_err(|err| format!("{}: {}", cli.file, err))?;
        Box::new(BufReader::new(file))
    };

    let mut all_offsets: Vec<usize> = Vec::new();
    let mut total = 0usize;
    let mut remaining = cli.max_matches;
    for (number, line) in input.lines().enumerate() {
        let line = line.map_err(|err| err.to_string())?;
        let haystack = if cli.ignore_case {
            line.to_lowercase()
        } else {
            line
        };

        let matches = matcher.find_all(&haystack, cli.max_matches);
        if matches.total == 0 {
            continue;
        }

        if cli.line_number {
            println!(
                "line {}: {} match(es) at {:?}",
                number + 1,
                matches.total,
                matches.offsets
            );
        } else {
            all_offsets.extend_from_slice(&matches.offsets);
            total += matches.total;
        }

        if cli.max_matches > 0 {
            remaining -= matches.total as isize;
            if remaining <= 0 {
                break;
            }
        }
    }

    if cli.json {
        println!(
            "{}",
            serde_json::json!({ "total_count": total, "indexes": all_offsets })
        );
    } else if !cli.line_number {
        println!("total matches: {}", total);
        println!("indexes: {:?}", all_offsets);
    }

    Ok(())
}
