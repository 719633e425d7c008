// typocheck-suggest: Generate spelling suggestions for words.
//
// Suggests corrections for the words given as arguments, or for words
// read from stdin (one per line). Correctly spelled words are reported
// as such.
//
// Usage:
//   typocheck-suggest [-w WORDS] [OPTIONS] [WORD...]
//
// Options:
//   -w, --words PATH         Word list file, one word per line
//   --strategy NAME          containment, permutation (default) or exhaustive
//   --max-candidates N       Candidate ceiling per word
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use typocheck_en::SpellChecker;

fn suggest_word(word: &str, checker: &SpellChecker, out: &mut impl Write) {
    let result = match checker.check_spelling(word) {
        Ok(r) => r,
        Err(e) => {
            let _ = out.flush();
            typocheck_cli::fatal(&format!("{word}: {e}"));
        }
    };
    if result.correct {
        let _ = writeln!(out, "{word} (correct)");
    } else if result.suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for s in &result.suggestions {
            let _ = writeln!(out, "  {s}");
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, args) = typocheck_cli::parse_words_path(&args);

    if typocheck_cli::wants_help(&args) {
        println!("typocheck-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: typocheck-suggest [-w WORDS] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --words PATH       Word list file, one word per line");
        println!("  --strategy NAME        containment, permutation (default) or exhaustive");
        println!("  --max-candidates N     Candidate ceiling per word");
        println!("  -h, --help             Print this help");
        return;
    }

    typocheck_cli::init_logging();

    let (options, args) =
        typocheck_cli::parse_checker_options(&args).unwrap_or_else(|e| typocheck_cli::fatal(&e));
    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let checker = typocheck_cli::load_checker(words_path.as_deref(), options)
        .unwrap_or_else(|e| typocheck_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
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
            suggest_word(word, &checker, &mut out);
        }
    } else {
        for word in words {
            suggest_word(word, &checker, &mut out);
        }
    }
}
