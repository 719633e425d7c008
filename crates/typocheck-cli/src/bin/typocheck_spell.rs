// typocheck-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   S: word    (suggestion, with -s)
//
// Usage:
//   typocheck-spell [-w WORDS] [OPTIONS]
//
// Options:
//   -w, --words PATH         Word list file, one word per line
//   -s, --suggest            Also print suggestions for misspelled words
//   --strategy NAME          containment, permutation (default) or exhaustive
//   --max-candidates N       Candidate ceiling per word
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, args) = typocheck_cli::parse_words_path(&args);

    if typocheck_cli::wants_help(&args) {
        println!("typocheck-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: typocheck-spell [-w WORDS] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -w, --words PATH       Word list file, one word per line");
        println!("  -s, --suggest          Also print suggestions for misspelled words");
        println!("  --strategy NAME        containment, permutation (default) or exhaustive");
        println!("  --max-candidates N     Candidate ceiling per word");
        println!("  -h, --help             Print this help");
        return;
    }

    typocheck_cli::init_logging();

    let (options, args) =
        typocheck_cli::parse_checker_options(&args).unwrap_or_else(|e| typocheck_cli::fatal(&e));
    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let checker = typocheck_cli::load_checker(words_path.as_deref(), options)
        .unwrap_or_else(|e| typocheck_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let result = match checker.check_spelling(word) {
            Ok(r) => r,
            Err(e) => {
                let _ = out.flush();
                typocheck_cli::fatal(&format!("{word}: {e}"));
            }
        };
        if result.correct {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                for suggestion in &result.suggestions {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
