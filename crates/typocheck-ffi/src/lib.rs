// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// typocheck-ffi: C-compatible FFI layer for SpellChecker.
//
// This crate exposes a stable C ABI that can be consumed by any language
// with C FFI support (Python/ctypes, C#/P-Invoke, etc.).
//
// Memory management rules:
// - Opaque `SpellChecker` pointer: created by `typocheck_new_from_file` or
//   `typocheck_new_from_words`, freed by `typocheck_free`.
// - Returned strings (including error messages): caller must free with
//   `typocheck_free_str`.
// - Returned string arrays: caller must free with `typocheck_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::fmt::Display;
use std::ptr;
use std::slice;
use std::sync::Arc;

use typocheck_en::{CheckStrategy, DictionaryCache, FileWordSource, SpellChecker};

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a spell checker from a word list file (UTF-8, one word per line).
///
/// The file is read immediately. Returns an opaque pointer on success, NULL
/// on failure. On failure, if `error_out` is non-NULL, it receives a
/// heap-allocated error string that the caller must free with
/// `typocheck_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typocheck_new_from_file(
    path: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut SpellChecker {
    let path = match arg_str(path, "path") {
        Ok(path) => path,
        Err(e) => return fail(error_out, e, ptr::null_mut()),
    };

    let cache = DictionaryCache::new(FileWordSource::new(path));
    let checker = SpellChecker::new(Arc::new(cache));
    if let Err(e) = checker.dictionary() {
        return fail(error_out, e, ptr::null_mut());
    }
    Box::into_raw(Box::new(checker))
}

/// Create a spell checker from an array of `count` C strings.
///
/// NULL entries are skipped. Returns NULL if `words` is NULL while `count`
/// is non-zero, or if an entry is not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typocheck_new_from_words(
    words: *const *const c_char,
    count: usize,
    error_out: *mut *mut c_char,
) -> *mut SpellChecker {
    if words.is_null() && count > 0 {
        return fail(error_out, "words is null", ptr::null_mut());
    }
    let entries = if count == 0 {
        &[][..]
    } else {
        unsafe { slice::from_raw_parts(words, count) }
    };

    let mut list = Vec::with_capacity(count);
    for (i, &entry) in entries.iter().enumerate().filter(|(_, e)| !e.is_null()) {
        match arg_str(entry, "word") {
            Ok(word) => list.push(word),
            Err(e) => return fail(error_out, format!("entry {i}: {e}"), ptr::null_mut()),
        }
    }
    Box::into_raw(Box::new(SpellChecker::from_words(list)))
}

/// Free a SpellChecker created by one of the `typocheck_new_*` functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typocheck_free(handle: *mut SpellChecker) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Spell checking ──────────────────────────────────────────────

/// Check whether a word is correctly spelled.
/// Returns 1 for correct, 0 for incorrect, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typocheck_spell(
    handle: *const SpellChecker,
    word: *const c_char,
    error_out: *mut *mut c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return fail(error_out, "handle is null", -1);
    };
    let word = match arg_str(word, "word") {
        Ok(word) => word,
        Err(e) => return fail(error_out, e, -1),
    };
    match handle.spell(word) {
        Ok(correct) => c_int::from(correct),
        Err(e) => fail(error_out, e, -1),
    }
}

/// Generate spelling suggestions.
///
/// Returns a NULL-terminated array of C strings, sorted; empty for a
/// correctly spelled word. Caller must free with `typocheck_free_str_array`.
/// Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typocheck_suggest(
    handle: *const SpellChecker,
    word: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return fail(error_out, "handle is null", ptr::null_mut());
    };
    let word = match arg_str(word, "word") {
        Ok(word) => word,
        Err(e) => return fail(error_out, e, ptr::null_mut()),
    };
    match handle.suggest(word) {
        Ok(suggestions) => into_c_array(suggestions),
        Err(e) => fail(error_out, e, ptr::null_mut()),
    }
}

// ── Option setters ──────────────────────────────────────────────

/// Set the suggestion strategy by name ("containment", "permutation",
/// "exhaustive"). Returns 0 on success, -1 for an unknown name.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typocheck_set_strategy(
    handle: *mut SpellChecker,
    name: *const c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return -1;
    };
    match arg_str(name, "strategy").map(str::parse::<CheckStrategy>) {
        Ok(Ok(strategy)) => {
            handle.set_strategy(strategy);
            0
        }
        _ => -1,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn typocheck_set_max_candidates(handle: *mut SpellChecker, value: usize) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_max_candidates(value);
    }
}

// ── Memory release ──────────────────────────────────────────────

/// Free a heap-allocated C string returned by typocheck functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typocheck_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typocheck_free_str_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut len = 0;
    loop {
        let p = unsafe { *arr.add(len) };
        if p.is_null() {
            break;
        }
        unsafe { typocheck_free_str(p) };
        len += 1;
    }
    // Rebuild the boxed slice allocated by `into_c_array`, terminator included.
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, len + 1)) });
}

// ── Internal helpers ────────────────────────────────────────────

/// Borrow a required string argument, naming it in the error.
fn arg_str<'a>(s: *const c_char, name: &str) -> Result<&'a str, String> {
    if s.is_null() {
        return Err(format!("{name} is null"));
    }
    unsafe { CStr::from_ptr(s) }
        .to_str()
        .map_err(|e| format!("{name} is not valid UTF-8 ({e})"))
}

/// Copy into an owned C string. Interior NULs become U+FFFD.
fn to_c_string(s: &str) -> CString {
    CString::new(s.replace('\0', "\u{FFFD}")).unwrap_or_default()
}

/// Hand `err` to the caller through `out` (if non-NULL) and return `failed`.
fn fail<T>(out: *mut *mut c_char, err: impl Display, failed: T) -> T {
    if let Some(slot) = unsafe { out.as_mut() } {
        *slot = to_c_string(&err.to_string()).into_raw();
    }
    failed
}

fn into_c_array(strings: Vec<String>) -> *mut *mut c_char {
    let ptrs: Box<[*mut c_char]> = strings
        .iter()
        .map(|s| to_c_string(s).into_raw())
        .chain(std::iter::once(ptr::null_mut()))
        .collect();
    Box::into_raw(ptrs).cast::<*mut c_char>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    unsafe fn collect_array(arr: *mut *mut c_char) -> Vec<String> {
        let mut out = Vec::new();
        let mut i = 0;
        loop {
            let p = unsafe { *arr.add(i) };
            if p.is_null() {
                break;
            }
            out.push(unsafe { CStr::from_ptr(p) }.to_str().unwrap().to_string());
            i += 1;
        }
        out
    }

    unsafe fn take_error(err: *mut c_char) -> String {
        assert!(!err.is_null());
        let msg = unsafe { CStr::from_ptr(err) }.to_str().unwrap().to_string();
        unsafe { typocheck_free_str(err) };
        msg
    }

    fn words_handle() -> *mut SpellChecker {
        let words = [c("balloon"), c("hello"), c("cat")];
        let ptrs: Vec<*const c_char> = words.iter().map(|w| w.as_ptr()).collect();
        let handle =
            unsafe { typocheck_new_from_words(ptrs.as_ptr(), ptrs.len(), ptr::null_mut()) };
        assert!(!handle.is_null());
        handle
    }

    #[test]
    fn spell_and_suggest_through_the_c_abi() {
        let handle = words_handle();
        unsafe {
            assert_eq!(typocheck_spell(handle, c("HELLO").as_ptr(), ptr::null_mut()), 1);
            assert_eq!(typocheck_spell(handle, c("HeLLo").as_ptr(), ptr::null_mut()), 0);

            let arr = typocheck_suggest(handle, c("ballloooon").as_ptr(), ptr::null_mut());
            assert!(!arr.is_null());
            assert_eq!(collect_array(arr), vec!["balloon"]);
            typocheck_free_str_array(arr);

            let arr = typocheck_suggest(handle, c("xyz").as_ptr(), ptr::null_mut());
            assert!(collect_array(arr).is_empty());
            typocheck_free_str_array(arr);

            typocheck_free(handle);
        }
    }

    #[test]
    fn file_handle_reads_word_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "balloon\ncat").unwrap();
        file.flush().unwrap();
        let path = c(file.path().to_str().unwrap());

        unsafe {
            let handle = typocheck_new_from_file(path.as_ptr(), ptr::null_mut());
            assert!(!handle.is_null());
            assert_eq!(typocheck_spell(handle, c("cat").as_ptr(), ptr::null_mut()), 1);
            typocheck_free(handle);
        }
    }

    #[test]
    fn missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = c(dir.path().join("missing.txt").to_str().unwrap());
        let mut err: *mut c_char = ptr::null_mut();

        unsafe {
            let handle = typocheck_new_from_file(path.as_ptr(), &mut err);
            assert!(handle.is_null());
            assert!(take_error(err).contains("missing.txt"));
        }
    }

    #[test]
    fn budget_error_is_reported() {
        let handle = words_handle();
        let mut err: *mut c_char = ptr::null_mut();
        unsafe {
            typocheck_set_max_candidates(handle, 1);
            let arr = typocheck_suggest(handle, c("ballloooon").as_ptr(), &mut err);
            assert!(arr.is_null());
            assert!(take_error(err).contains("search space exceeded"));
            typocheck_free(handle);
        }
    }

    #[test]
    fn strategy_setter_validates_name() {
        let handle = words_handle();
        unsafe {
            assert_eq!(typocheck_set_strategy(handle, c("containment").as_ptr()), 0);
            let arr = typocheck_suggest(handle, c("ballloooon").as_ptr(), ptr::null_mut());
            assert!(collect_array(arr).is_empty());
            typocheck_free_str_array(arr);

            assert_eq!(typocheck_set_strategy(handle, c("fuzzy").as_ptr()), -1);
            typocheck_free(handle);
        }
    }

    #[test]
    fn null_arguments_are_rejected() {
        unsafe {
            assert_eq!(typocheck_spell(ptr::null(), c("cat").as_ptr(), ptr::null_mut()), -1);
            assert!(typocheck_suggest(ptr::null(), c("cat").as_ptr(), ptr::null_mut()).is_null());
            assert!(typocheck_new_from_words(ptr::null(), 2, ptr::null_mut()).is_null());
            typocheck_free(ptr::null_mut());
            typocheck_free_str(ptr::null_mut());
            typocheck_free_str_array(ptr::null_mut());
        }
    }

    #[test]
    fn argument_errors_name_the_argument() {
        let handle = words_handle();
        let bad = CString::new(vec![b'c', 0xff, b't']).unwrap();
        let mut err: *mut c_char = ptr::null_mut();
        unsafe {
            assert_eq!(typocheck_spell(handle, ptr::null(), &mut err), -1);
            assert_eq!(take_error(err), "word is null");

            err = ptr::null_mut();
            assert!(typocheck_suggest(handle, bad.as_ptr(), &mut err).is_null());
            assert!(take_error(err).starts_with("word is not valid UTF-8"));

            err = ptr::null_mut();
            assert_eq!(typocheck_spell(ptr::null(), c("cat").as_ptr(), &mut err), -1);
            assert_eq!(take_error(err), "handle is null");

            err = ptr::null_mut();
            let cat = c("cat");
            let words = [cat.as_ptr(), bad.as_ptr()];
            assert!(typocheck_new_from_words(words.as_ptr(), 2, &mut err).is_null());
            assert!(take_error(err).starts_with("entry 1: word is not valid UTF-8"));

            typocheck_free(handle);
        }
    }

    #[test]
    fn interior_nul_does_not_lose_the_message() {
        let mut err: *mut c_char = ptr::null_mut();
        let result = fail(&mut err, "bad\0word", -1);
        assert_eq!(result, -1);
        assert_eq!(unsafe { take_error(err) }, "bad\u{FFFD}word");
        // A NULL out-pointer is ignored.
        assert!(fail(ptr::null_mut(), "ignored", true));
    }

    #[test]
    fn empty_word_list_is_accepted() {
        unsafe {
            let handle = typocheck_new_from_words(ptr::null(), 0, ptr::null_mut());
            assert!(!handle.is_null());
            assert_eq!(typocheck_spell(handle, c("cat").as_ptr(), ptr::null_mut()), 0);
            typocheck_free(handle);
        }
    }
}
