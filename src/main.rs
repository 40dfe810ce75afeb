use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use lexan::{
    display_error,
    driver::run,
    lexer::lexer::{ScanOptions, DEFAULT_MAX_LEXEME_LEN},
    tracing_config::init_tracing,
};

/// Splits source files into classified tokens, writing `<file>.lexer.out`
/// for every input file.
#[derive(Parser)]
#[command(name = "lexan")]
#[command(version)]
struct Cli {
    /// Source files to scan, in order
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Skip a file with an unrecognised or unterminated lexeme instead of
    /// stopping the whole run
    #[arg(long)]
    keep_going: bool,

    /// Longest lexeme accepted, in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_LEXEME_LEN)]
    max_lexeme_len: usize,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let options = ScanOptions {
        max_lexeme_len: cli.max_lexeme_len,
        keep_going: cli.keep_going,
    };

    match run(&cli.files, &options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}
