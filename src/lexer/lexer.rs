use std::{io::Write, rc::Rc};

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN, UNNAMED_INPUT,
};

use super::{
    classifier::classify,
    lookahead::Lookahead,
    tokens::{Category, Token},
    transitions::{finish_at_eof, transition, Step},
};

/// Default bound on a single lexeme, in bytes.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 65536;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Longest lexeme accepted, in bytes.
    pub max_lexeme_len: usize,
    /// Skip a file with a scan fault instead of ending the whole run.
    pub keep_going: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
            keep_going: false,
        }
    }
}

/// Single-pass scanner state for one input.
///
/// `state` is [`Category::Idle`] between tokens, and `lexeme` is empty
/// whenever it is.
pub struct Lexer<I: Iterator<Item = char>> {
    input: Lookahead<I>,
    state: Category,
    lexeme: String,
    /// Byte offset of the first character of `lexeme`.
    start: usize,
    file: Rc<String>,
    max_lexeme_len: usize,
    /// Set once the lexeme in progress outgrew `max_lexeme_len`; the rest of
    /// that token is read but not kept.
    overflowed: bool,
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(chars: I, file: Option<String>) -> Lexer<I> {
        Lexer::with_options(chars, file, &ScanOptions::default())
    }

    pub fn with_options(chars: I, file: Option<String>, options: &ScanOptions) -> Lexer<I> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from(UNNAMED_INPUT))
        };

        Lexer {
            input: Lookahead::new(chars),
            state: Category::Idle,
            lexeme: String::new(),
            start: 0,
            file: file_name,
            max_lexeme_len: options.max_lexeme_len,
            overflowed: false,
        }
    }

    /// Scans up to the end of the next token. `Ok(None)` once the input is
    /// exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        loop {
            let Some(ch) = self.input.next_char() else {
                return self.finish();
            };

            if self.state == Category::Idle {
                self.begin(ch)?;
                continue;
            }

            let next = self.input.peek_char();
            match transition(self.state, &self.lexeme, ch, next) {
                Step::Absorb => self.push(ch)?,
                Step::AbsorbAs(category) => {
                    self.state = category;
                    self.push(ch)?;
                }
                Step::Finish => {
                    self.push(ch)?;
                    if let Some(token) = self.complete(self.state) {
                        return Ok(Some(token));
                    }
                }
                Step::FinishWithNext => {
                    self.push(ch)?;
                    if let Some(closing) = self.input.next_char() {
                        self.push(closing)?;
                    }
                    if let Some(token) = self.complete(self.state) {
                        return Ok(Some(token));
                    }
                }
                Step::Yield(category) => {
                    self.input.push_back(ch);
                    if let Some(token) = self.complete(category) {
                        return Ok(Some(token));
                    }
                }
            }
        }
    }

    fn begin(&mut self, ch: char) -> Result<(), Error> {
        self.lexeme.clear();

        let next = self.input.peek_char();
        match classify(ch, next) {
            Category::Idle => Ok(()),
            Category::Unknown => {
                self.start = self.input.offset() - ch.len_utf8();
                Err(self.error(ErrorImpl::UnrecognisedLexeme {
                    lexeme: ch.to_string(),
                }))
            }
            category => {
                self.state = category;
                self.start = self.input.offset() - ch.len_utf8();
                self.push(ch)
            }
        }
    }

    fn push(&mut self, ch: char) -> Result<(), Error> {
        if self.overflowed {
            return Ok(());
        }

        if self.lexeme.len() + ch.len_utf8() > self.max_lexeme_len {
            self.overflowed = true;
            return Err(self.error(ErrorImpl::BufferOverflow {
                limit: self.max_lexeme_len,
            }));
        }

        self.lexeme.push(ch);
        Ok(())
    }

    /// Ends the token in progress. An overflowed token was already reported
    /// and is dropped.
    fn complete(&mut self, category: Category) -> Option<Token> {
        if self.overflowed {
            self.reset();
            return None;
        }

        Some(self.emit(category))
    }

    fn reset(&mut self) {
        self.lexeme.clear();
        self.state = Category::Idle;
        self.overflowed = false;
    }

    fn emit(&mut self, category: Category) -> Token {
        let token = MK_TOKEN!(self.lexeme.clone(), category);
        trace!(lexeme = %token.lexeme, category = %token.category, "token");

        self.lexeme.clear();
        self.state = Category::Idle;
        token
    }

    fn finish(&mut self) -> Result<Option<Token>, Error> {
        if self.state == Category::Idle {
            return Ok(None);
        }

        if self.overflowed {
            self.reset();
            return Ok(None);
        }

        match finish_at_eof(self.state, &self.lexeme) {
            Some(category) => Ok(Some(self.emit(category))),
            None => {
                let error = self.error(ErrorImpl::UnterminatedLiteral {
                    category: self.state,
                    lexeme: self.lexeme.clone(),
                });
                self.reset();
                Err(error)
            }
        }
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, Position::at(self.start, Rc::clone(&self.file)))
    }
}

impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Writes every token of `lexer` to `out`, one `<lexeme> (<category>)` line
/// each, and returns how many were written. Stops at the first scan fault;
/// lines already written are flushed and stay written.
///
/// `destination` names `out` in write failures.
pub fn write_tokens<I, W>(lexer: &mut Lexer<I>, out: &mut W, destination: &str) -> Result<usize, Error>
where
    I: Iterator<Item = char>,
    W: Write,
{
    let write_error = |error: std::io::Error| {
        Error::unpositioned(ErrorImpl::OutputWriteFailed {
            path: destination.to_string(),
            message: error.to_string(),
        })
    };

    let mut count = 0;
    loop {
        let token = match lexer.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => break,
            Err(error) => {
                out.flush().map_err(write_error)?;
                return Err(error);
            }
        };

        writeln!(out, "{}", token).map_err(write_error)?;
        count += 1;
    }

    out.flush().map_err(write_error)?;
    Ok(count)
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source.chars(), file).collect()
}
