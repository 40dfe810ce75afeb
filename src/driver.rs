//! Per-file driver: reads an input file, creates `<input>.lexer.out` next to
//! it and streams the tokens into it.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::{write_tokens, Lexer, ScanOptions},
};

pub const OUTPUT_SUFFIX: &str = ".lexer.out";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files scanned to the end.
    pub scanned: usize,
    /// Files skipped after an error.
    pub skipped: usize,
    /// Tokens written across all scanned files.
    pub tokens: usize,
}

/// `input` with `.lexer.out` appended to the whole path, existing extension
/// included.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Scans one file into its output file and returns the number of tokens
/// written.
pub fn lex_file(input: &Path, options: &ScanOptions) -> Result<usize, Error> {
    let bytes = fs::read(input).map_err(|_| {
        Error::unpositioned(ErrorImpl::InputNotFound {
            path: input.display().to_string(),
        })
    })?;
    let source = String::from_utf8_lossy(&bytes);

    let destination = output_path(input);
    let destination_name = destination.display().to_string();
    let file = File::create(&destination).map_err(|_| {
        Error::unpositioned(ErrorImpl::OutputNotCreatable {
            path: destination_name.clone(),
        })
    })?;

    debug!(input = %input.display(), output = %destination_name, "lexing file");

    let mut lexer = Lexer::with_options(
        source.chars(),
        Some(input.display().to_string()),
        options,
    );
    let mut out = BufWriter::new(file);
    let count = write_tokens(&mut lexer, &mut out, &destination_name)?;

    debug!(input = %input.display(), tokens = count, "finished file");
    Ok(count)
}

/// Scans every path in order.
///
/// Files that cannot be read or written are reported and skipped. A scan
/// fault ends the run with that error unless `options.keep_going` is set,
/// in which case it is reported and the file is skipped as well.
pub fn run(paths: &[PathBuf], options: &ScanOptions) -> Result<RunSummary, Error> {
    if paths.is_empty() {
        return Err(Error::unpositioned(ErrorImpl::NoArguments));
    }

    let mut summary = RunSummary::default();

    for path in paths {
        match lex_file(path, options) {
            Ok(count) => {
                summary.scanned += 1;
                summary.tokens += count;
            }
            Err(error) if error.is_fatal() && !options.keep_going => return Err(error),
            Err(error) => {
                warn!(input = %path.display(), error = %error, "skipping file");
                display_error(&error);
                summary.skipped += 1;
            }
        }
    }

    debug!(
        scanned = summary.scanned,
        skipped = summary.skipped,
        tokens = summary.tokens,
        "run complete"
    );
    Ok(summary)
}
