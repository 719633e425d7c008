// typocheck-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use typocheck_en::{CheckStrategy, CheckerOptions, DictionaryCache, FileWordSource, SpellChecker};

/// Word list file name looked up in the home and working directories.
const WORDS_FILE: &str = "words.txt";

/// Environment variable naming the word list file.
pub const WORDS_PATH_ENV: &str = "TYPOCHECK_WORDS_PATH";

/// Install the stderr log subscriber. Verbosity comes from `RUST_LOG`
/// (default: warnings only).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Search for a word list and create a SpellChecker over it.
///
/// Search order:
/// 1. `words_path` argument (if provided)
/// 2. `TYPOCHECK_WORDS_PATH` environment variable
/// 3. `~/.typocheck/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. `words.txt` in the current working directory
///
/// The word list is loaded eagerly so that a broken file is reported
/// before any input is read.
pub fn load_checker(
    words_path: Option<&str>,
    options: CheckerOptions,
) -> Result<SpellChecker, String> {
    let search_paths = build_search_paths(words_path);

    let Some(path) = search_paths.iter().find(|p| p.is_file()) else {
        return Err(format!(
            "could not find a word list in any of the search paths:\n{}",
            search_paths
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    };

    let cache = DictionaryCache::new(FileWordSource::new(path));
    let checker = SpellChecker::with_options(Arc::new(cache), options);
    checker.dictionary().map_err(|e| e.to_string())?;
    Ok(checker)
}

/// Build the list of candidate word list files.
fn build_search_paths(words_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = words_path {
        paths.push(PathBuf::from(p));
    }

    // 2. TYPOCHECK_WORDS_PATH environment variable
    if let Ok(env_path) = std::env::var(WORDS_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".typocheck").join(WORDS_FILE));
    }

    // 4. System word list
    paths.push(PathBuf::from("/usr/share/dict/words"));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--words=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(words_path, remaining_args)`.
pub fn parse_words_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut words_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--words=") {
            words_path = Some(val.to_string());
        } else if arg == "--words" || arg == "-w" {
            if i + 1 < args.len() {
                words_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (words_path, remaining)
}

/// Parse `--strategy NAME` and `--max-candidates N` (either also in
/// `--flag=value` form).
///
/// Returns `(options, remaining_args)`.
pub fn parse_checker_options(args: &[String]) -> Result<(CheckerOptions, Vec<String>), String> {
    let mut options = CheckerOptions::default();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        match flag {
            "--strategy" | "--max-candidates" => {
                let value = match inline {
                    Some(v) => v,
                    None => iter
                        .next()
                        .cloned()
                        .ok_or_else(|| format!("{flag} requires a value"))?,
                };
                if flag == "--strategy" {
                    options.strategy = value.parse::<CheckStrategy>().map_err(|e| e.to_string())?;
                } else {
                    options.max_candidates = value
                        .parse()
                        .map_err(|_| format!("invalid number for --max-candidates: {value}"))?;
                }
            }
            _ => remaining.push(arg.clone()),
        }
    }

    Ok((options, remaining))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn words_path_short_and_long_forms() {
        let (path, rest) = parse_words_path(&args(&["-w", "a.txt", "-s"]));
        assert_eq!(path.as_deref(), Some("a.txt"));
        assert_eq!(rest, args(&["-s"]));

        let (path, rest) = parse_words_path(&args(&["hello", "--words=b.txt"]));
        assert_eq!(path.as_deref(), Some("b.txt"));
        assert_eq!(rest, args(&["hello"]));

        let (path, _) = parse_words_path(&args(&["hello"]));
        assert!(path.is_none());
    }

    #[test]
    fn checker_options_are_parsed() {
        let (options, rest) = parse_checker_options(&args(&[
            "--strategy",
            "exhaustive",
            "word",
            "--max-candidates=10",
        ]))
        .unwrap();
        assert_eq!(options.strategy, CheckStrategy::Exhaustive);
        assert_eq!(options.max_candidates, 10);
        assert_eq!(rest, args(&["word"]));
    }

    #[test]
    fn checker_options_reject_bad_values() {
        assert!(parse_checker_options(&args(&["--strategy", "fuzzy"])).is_err());
        assert!(parse_checker_options(&args(&["--max-candidates", "lots"])).is_err());
        assert!(parse_checker_options(&args(&["--max-candidates"])).is_err());
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some("/tmp/mine.txt"));
        assert_eq!(paths[0], PathBuf::from("/tmp/mine.txt"));
        assert!(paths.contains(&PathBuf::from("/usr/share/dict/words")));
    }

    #[test]
    fn load_checker_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "balloon\nhello").unwrap();
        file.flush().unwrap();
        let path = file.path().to_str().unwrap();

        let checker = load_checker(Some(path), CheckerOptions::default()).unwrap();
        assert!(checker.spell("hello").unwrap());
        assert_eq!(checker.suggest("ballloooon").unwrap(), vec!["balloon"]);
    }

    #[test]
    fn load_checker_applies_options() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "balloon").unwrap();
        file.flush().unwrap();
        let path = file.path().to_str().unwrap();

        let options = CheckerOptions {
            strategy: CheckStrategy::Containment,
            ..CheckerOptions::default()
        };
        let checker = load_checker(Some(path), options).unwrap();
        assert_eq!(checker.options().strategy, CheckStrategy::Containment);
        assert!(checker.suggest("ballloooon").unwrap().is_empty());
    }
}
