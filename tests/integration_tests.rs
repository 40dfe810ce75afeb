//! Integration tests for end-to-end scanning.
//!
//! These tests run the per-file driver against real files in scratch
//! directories and check the `.lexer.out` files it leaves behind.

use lexan::{
    driver::{lex_file, output_path, run, RunSummary},
    errors::errors::ErrorImpl,
    lexer::lexer::ScanOptions,
};
use pretty_assertions::assert_eq;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read_output(input: &Path) -> String {
    fs::read_to_string(output_path(input)).unwrap()
}

#[test]
fn test_output_path_appends_suffix() {
    assert_eq!(
        output_path(Path::new("dir/prog.src")),
        PathBuf::from("dir/prog.src.lexer.out")
    );
    assert_eq!(output_path(Path::new("prog")), PathBuf::from("prog.lexer.out"));
}

#[test]
fn test_lex_simple_file() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "simple.src", "x := y <= 10;\n");

    let count = lex_file(&input, &ScanOptions::default()).unwrap();

    assert_eq!(count, 6);
    assert_eq!(
        read_output(&input),
        "x (identifier)\n:= (operator)\ny (identifier)\n<= (operator)\n10 (numeric literal)\n; (operator)\n"
    );
}

#[test]
fn test_lex_file_without_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "range.src", "1..5");

    lex_file(&input, &ScanOptions::default()).unwrap();

    assert_eq!(
        read_output(&input),
        "1 (numeric literal)\n.. (operator)\n5 (numeric literal)\n"
    );
}

#[test]
fn test_lex_preserves_delimiters() {
    let dir = TempDir::new().unwrap();
    let input = write_source(
        &dir,
        "literals.src",
        "/* header */\nname := \"Ada\";\nc := 'x';\n",
    );

    lex_file(&input, &ScanOptions::default()).unwrap();

    assert_eq!(
        read_output(&input),
        "\
/* header */ (comment)
name (identifier)
:= (operator)
\"Ada\" (string)
; (operator)
c (identifier)
:= (operator)
'x' (character literal)
; (operator)
"
    );
}

#[test]
fn test_lex_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = write_source(
        &dir,
        "twice.src",
        "function f return integer is begin return 16#1F#; end f;\n",
    );

    lex_file(&input, &ScanOptions::default()).unwrap();
    let first = fs::read(output_path(&input)).unwrap();
    lex_file(&input, &ScanOptions::default()).unwrap();
    let second = fs::read(output_path(&input)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.src");

    let error = lex_file(&input, &ScanOptions::default()).unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::InputNotFound { .. }));
    assert!(!output_path(&input).exists());
}

#[test]
fn test_output_not_creatable() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "blocked.src", "x\n");
    fs::create_dir(output_path(&input)).unwrap();

    let error = lex_file(&input, &ScanOptions::default()).unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::OutputNotCreatable { .. }));
}

#[test]
fn test_unrecognised_lexeme_keeps_partial_output() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "bad.src", "x := 1;\ny := @;\n");

    let error = lex_file(&input, &ScanOptions::default()).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedLexeme {
            lexeme: "@".to_string()
        }
    );
    assert_eq!(error.get_position().0, 13);
    assert_eq!(
        read_output(&input),
        "x (identifier)\n:= (operator)\n1 (numeric literal)\n; (operator)\ny (identifier)\n:= (operator)\n"
    );
}

#[test]
fn test_run_without_arguments() {
    let error = run(&[], &ScanOptions::default()).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::NoArguments);
}

#[test]
fn test_run_skips_missing_files() {
    let dir = TempDir::new().unwrap();
    let first = write_source(&dir, "first.src", "begin end\n");
    let missing = dir.path().join("missing.src");
    let last = write_source(&dir, "last.src", "x\n");

    let summary = run(&[first.clone(), missing, last.clone()], &ScanOptions::default()).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            scanned: 2,
            skipped: 1,
            tokens: 3,
        }
    );
    assert_eq!(read_output(&first), "begin (keyword)\nend (keyword)\n");
    assert_eq!(read_output(&last), "x (identifier)\n");
}

#[test]
fn test_run_stops_on_unrecognised_lexeme() {
    let dir = TempDir::new().unwrap();
    let bad = write_source(&dir, "bad.src", "x $ y\n");
    let after = write_source(&dir, "after.src", "y\n");

    let error = run(&[bad, after.clone()], &ScanOptions::default()).unwrap_err();

    assert!(error.is_fatal());
    assert_eq!(error.get_error_name(), "UnrecognisedLexeme");
    assert!(!output_path(&after).exists());
}

#[test]
fn test_run_keep_going_skips_faulty_file() {
    let dir = TempDir::new().unwrap();
    let bad = write_source(&dir, "bad.src", "s := \"open\n");
    let after = write_source(&dir, "after.src", "y\n");
    let options = ScanOptions {
        keep_going: true,
        ..ScanOptions::default()
    };

    let summary = run(&[bad, after.clone()], &options).unwrap();

    assert_eq!(summary.scanned, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(read_output(&after), "y (identifier)\n");
}

#[test]
fn test_invalid_utf8_is_unrecognised() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("binary.src");
    fs::write(&input, b"x \xff y\n").unwrap();

    let error = lex_file(&input, &ScanOptions::default()).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedLexeme {
            lexeme: "\u{FFFD}".to_string()
        }
    );
}
